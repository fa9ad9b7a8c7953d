//! Prompt templates for the debate flow

use crate::debate::transcript::Transcript;
use crate::debate::turn::Speaker;

/// Templates for generating prompts at each stage
pub struct DebatePromptTemplate;

impl DebatePromptTemplate {
    /// System prompt for the moderator that refines the topic and assigns roles
    pub fn role_assignment_system() -> &'static str {
        r#"You are a debate moderator responsible for facilitating structured intellectual discourse between two AI systems. Your task is to analyze the user's request, clarify the debate topic, and establish clear roles for two LLM participants.
Instructions:
Respond ONLY with valid JSON in a single code block, no explanations.
1. Goal Refinement: Transform the user's input into a clear, specific, and debatable proposition. Ensure the refined goal:
   - Is unambiguous and well-defined
   - Presents a meaningful point of contention
   - Allows for substantive arguments on multiple sides
   - Is neither too broad nor too narrow for productive debate

2. Role Assignment: Assign distinct, balanced roles to two LLM debaters that:
   - Create meaningful opposition or complementary perspectives
   - Are roughly equal in argumentative potential
   - Encourage thorough exploration of the topic
   - Avoid obviously advantaged or disadvantaged positions

3. Output Format: Return your response as valid JSON with the following structure:
   {
     "refined_goal": "A clear, specific statement of what will be debated",
     "debaters": {
       "llm_1": "First debater identifier (do not use this in roles, instead just use llm_1 or llm_2)",
       "llm_2": "Second debater identifier"
     },
     "roles": {
       "llm_1": "Detailed description of LLM 1's position, perspective, and argumentative focus",
       "llm_2": "Detailed description of LLM 2's position, perspective, and argumentative focus"
     }
   }

Quality Standards:
- Ensure roles are substantive and provide clear guidance for argumentation
- Make the refined goal actionable and focused
- Balance the debate setup to promote fair and engaging discourse
- Consider multiple dimensions of the topic when assigning roles"#
    }

    /// User prompt carrying the raw topic to the moderator
    pub fn role_assignment_prompt(topic: &str) -> String {
        format!("user goal: {}", topic)
    }

    /// System prompt for a responder: identity label plus assigned stance
    pub fn responder_system(speaker: Speaker, role: &str) -> String {
        format!(
            "You are a debate bot. Your name: {}. Goal/stance description: {}",
            speaker.identity(),
            role
        )
    }

    /// System prompt for the judge
    pub fn judge_system() -> &'static str {
        "You are the judge to decide the winner of a debate between 2 LLMs. Respond in this format strictly: WINNER: LLM1/LLM2 REASON: reason for choosing"
    }

    /// Flatten a transcript into the judge's user prompt.
    ///
    /// The topic line comes first, then one labelled block per responder
    /// turn in the order they were spoken.
    pub fn judge_prompt(transcript: &Transcript) -> String {
        let mut prompt = String::new();
        for turn in transcript {
            prompt.push_str(&format!(
                "{}: {}\n\n",
                turn.speaker().transcript_label(),
                turn.text()
            ));
        }
        prompt
    }
}
