//! Known-benign validation messages that are never surfaced.

/// Message ids of validation rules that are false positives or pure noise.
/// A matching event is dropped before anything else happens: no counting,
/// no logging, no debug output.
const DENIED_MESSAGE_IDS: &[i32] = &[
    // UNASSIGNED-CoreValidation-Shader-OutputNotConsumed: fires whenever a
    // shader deliberately leaves outputs unread.
    101294395,
    // Perf advisory about image blits in GENERAL layout.
    1303270965,
    // VUID-vkCmdDraw-None-02686 in its three id variants; false positive
    // once the descriptor it complains about is actually bound.
    606910136,
    -392708513,
    -384083808,
];

/// True when `message_id` belongs to a rule on the fixed deny-list.
pub fn is_denied(message_id: i32) -> bool {
    DENIED_MESSAGE_IDS.contains(&message_id)
}
