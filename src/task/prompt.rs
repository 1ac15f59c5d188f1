use crate::task::instance::TaskInstance;

/// Fixed description of the ground-truth animation appended to every prompt.
pub const ANIMATION_SUFFIX: &str = "The video shows the new symbol fading in above the target \
position, then sliding down while other symbols shift to make room.";

/// Prompt text for `task`. Depends only on instance fields, never on rendered pixels.
pub fn insertion_prompt(task: &TaskInstance) -> String {
    format!(
        "Insert symbol {} at position {}. {ANIMATION_SUFFIX}",
        task.inserted(),
        task.insertion_index()
    )
}

#[cfg(test)]
#[path = "../../tests/unit/task/prompt.rs"]
mod tests;
