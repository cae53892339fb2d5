//! Deterministic local replies used when no provider produced one.
//!
//! Classification looks only at the lower-cased message; conversation
//! history plays no part. Topics are checked in declaration order and the
//! first match wins, so a message mentioning both "plan my day" and "task"
//! gets the day-planning reply.

/// Topics the local responder recognises, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Motivation,
    DayPlanning,
    Tasks,
    Notes,
    Productivity,
    Creative,
    Science,
    Greeting,
    General,
}

impl Topic {
    /// Classify a message. Never fails; unmatched input is `General`.
    pub fn classify(message: &str) -> Topic {
        let lower = message.to_lowercase();
        let has = |needle: &str| lower.contains(needle);

        if has("motivat") || has("inspir") || has("stay focused") {
            Topic::Motivation
        } else if has("plan") && has("day") {
            Topic::DayPlanning
        } else if has("task") || has("todo") {
            Topic::Tasks
        } else if has("note") {
            Topic::Notes
        } else if has("productivity") || has("productive") {
            Topic::Productivity
        } else if has("story") || has("creative") {
            Topic::Creative
        } else if has("quantum") || has("physics") {
            Topic::Science
        } else if has("hello") || has("hi") || has("hey") {
            Topic::Greeting
        } else {
            Topic::General
        }
    }

    pub fn reply(self) -> &'static str {
        match self {
            Topic::Motivation => MOTIVATION,
            Topic::DayPlanning => DAY_PLANNING,
            Topic::Tasks => TASKS,
            Topic::Notes => NOTES,
            Topic::Productivity => PRODUCTIVITY,
            Topic::Creative => CREATIVE,
            Topic::Science => SCIENCE,
            Topic::Greeting => GREETING,
            Topic::General => GENERAL,
        }
    }
}

/// The canned reply for `message`.
pub fn local_reply(message: &str) -> &'static str {
    Topic::classify(message).reply()
}

pub const MOTIVATION: &str = r#"Here are powerful ways to stay motivated:

**1. Set Clear Goals**
- Break big goals into small, achievable steps
- Write them down and review daily
- Celebrate small wins along the way

**2. Create a Routine**
- Start your day with a morning ritual
- Build consistent habits
- Use the "2-minute rule" to get started

**3. Find Your Why**
- Connect tasks to your bigger purpose
- Visualize your success
- Remember why you started

**4. Stay Accountable**
- Share goals with friends or mentors
- Track your progress visually
- Join communities with similar goals

**5. Manage Energy, Not Just Time**
- Take regular breaks
- Exercise and eat well
- Get enough sleep (7-9 hours)

**6. Eliminate Distractions**
- Turn off notifications
- Create a dedicated workspace
- Use website blockers during focus time

**7. Reward Yourself**
- Set up a reward system
- Take breaks guilt-free
- Treat yourself after milestones

**Remember**: Motivation is like a muscle - it gets stronger with practice. Start small, be consistent, and don't be too hard on yourself!

What specific area would you like to work on?"#;

pub const DAY_PLANNING: &str = r#"I'd be happy to help you plan your day! Here's a suggested structure:

1. **Morning (6-9 AM)**: Start with a healthy breakfast and review your goals
2. **Mid-Morning (9-12 PM)**: Focus on your most important tasks
3. **Afternoon (12-3 PM)**: Lunch break and collaborative work
4. **Late Afternoon (3-6 PM)**: Meetings and lighter tasks
5. **Evening (6+ PM)**: Wind down, exercise, and personal time

What specific activities would you like to include in your schedule?"#;

pub const TASKS: &str = "I can help you manage your tasks! You can create, organize, and track tasks in the Tasks section. Would you like me to guide you through creating a task, or do you have specific questions about task management?";

pub const NOTES: &str = "Notes are a great way to capture your thoughts! You can create colorful notes in the Notes section. Each note can have a title, content, and custom color. Would you like tips on organizing your notes effectively?";

pub const PRODUCTIVITY: &str = r#"Here are some proven productivity tips:

1. **Time Blocking**: Schedule specific time slots for different tasks
2. **Pomodoro Technique**: Work in 25-minute focused sessions with 5-minute breaks
3. **Prioritize**: Use the Eisenhower Matrix (urgent/important)
4. **Minimize Distractions**: Turn off notifications during focus time
5. **Take Breaks**: Regular breaks improve focus and creativity

Which area would you like to explore further?"#;

pub const CREATIVE: &str = r#"I'd love to help with creative writing! Here's a story starter:

**The Mysterious Door**

In the heart of an ancient library, behind rows of dusty books, Sarah discovered a door that wasn't there yesterday. Its surface shimmered with an otherworldly glow, and strange symbols danced across its frame. As she reached for the handle, she heard a whisper: "Only those who seek knowledge may enter..."

Would you like me to continue this story, or would you prefer to write about a different theme?"#;

pub const SCIENCE: &str = r#"Quantum physics is fascinating! Here's a simple explanation:

**Quantum Physics Basics:**

Quantum physics studies the behavior of matter and energy at the smallest scales (atoms and subatomic particles). Key concepts include:

1. **Wave-Particle Duality**: Particles can behave as both waves and particles
2. **Superposition**: Particles can exist in multiple states simultaneously
3. **Entanglement**: Particles can be connected across vast distances
4. **Uncertainty Principle**: We cannot know both position and momentum precisely

Think of it like this: At the quantum level, reality is probabilistic rather than deterministic. It's like a coin that's both heads and tails until you look at it!

What specific aspect interests you most?"#;

pub const GREETING: &str = "Hello! I'm Nova, your AI assistant. I'm here to help you with planning, productivity, creative tasks, and answering questions. What can I help you with today?";

pub const GENERAL: &str = r#"I'm here to help! I can assist you with:

• **Planning & Scheduling**: Help organize your day or week
• **Task Management**: Create and track your to-dos
• **Creative Writing**: Generate stories or content ideas
• **Learning**: Explain concepts and answer questions
• **Productivity**: Share tips and strategies
• **Motivation**: Tips to stay focused and inspired

What would you like to explore?"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motivation_keywords() {
        for msg in [
            "I need some motivation",
            "Something INSPIRING please",
            "how do I stay focused?",
        ] {
            assert_eq!(Topic::classify(msg), Topic::Motivation, "{msg}");
        }
        assert!(local_reply("motivate me").starts_with("Here are powerful ways to stay motivated"));
    }

    #[test]
    fn test_day_planning_needs_both_words() {
        assert_eq!(Topic::classify("Help me plan my day"), Topic::DayPlanning);
        assert!(local_reply("Help me plan my day").contains("Morning (6-9 AM)"));
        assert_ne!(Topic::classify("what is the plan"), Topic::DayPlanning);
    }

    #[test]
    fn test_earlier_topic_wins() {
        // "plan" + "day" outranks "task".
        assert_eq!(Topic::classify("plan my day around this task"), Topic::DayPlanning);
        // Motivation outranks everything.
        assert_eq!(Topic::classify("inspire me to finish my notes"), Topic::Motivation);
        assert_eq!(Topic::classify("add a todo about my note"), Topic::Tasks);
    }

    #[test]
    fn test_remaining_topics() {
        assert_eq!(Topic::classify("take a note"), Topic::Notes);
        assert_eq!(Topic::classify("be more productive"), Topic::Productivity);
        assert_eq!(Topic::classify("tell me a story"), Topic::Creative);
        assert_eq!(Topic::classify("explain quantum stuff"), Topic::Science);
    }

    #[test]
    fn test_greeting() {
        assert_eq!(local_reply("Hello"), GREETING);
        assert_eq!(local_reply("hey nova"), GREETING);
        assert!(GREETING.starts_with("Hello! I'm Nova"));
    }

    #[test]
    fn test_substring_match_is_loose() {
        // "hi" inside "this" still counts as a greeting.
        assert_eq!(Topic::classify("is this working"), Topic::Greeting);
    }

    #[test]
    fn test_fallback_menu() {
        assert_eq!(local_reply("what can you do for me"), GENERAL);
        assert_eq!(local_reply(""), GENERAL);
    }

    #[test]
    fn test_every_reply_non_empty() {
        for topic in [
            Topic::Motivation,
            Topic::DayPlanning,
            Topic::Tasks,
            Topic::Notes,
            Topic::Productivity,
            Topic::Creative,
            Topic::Science,
            Topic::Greeting,
            Topic::General,
        ] {
            assert!(!topic.reply().trim().is_empty());
        }
    }
}
