//! Advisory text rendered from a compatibility result.

/// Builds guidance sentences: one for missing skills, one for weak skills, or a single
/// congratulatory sentence when neither list has entries.
pub fn advisory_sentences(missing: &[String], weak: &[String], role: &str) -> Vec<String> {
    let mut messages = Vec::new();

    if !missing.is_empty() {
        messages.push(format!(
            "To strengthen alignment with the {role} role, the candidate should acquire foundational knowledge in {}.",
            missing.join(", ")
        ));
    }

    if !weak.is_empty() {
        messages.push(format!(
            "Improving hands-on experience in {} would significantly enhance job readiness.",
            weak.join(", ")
        ));
    }

    if messages.is_empty() {
        messages.push(format!(
            "The candidate demonstrates strong alignment with the skill expectations for the {role} role."
        ));
    }

    messages
}
