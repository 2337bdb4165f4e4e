//! Player-facing message rendering.
//!
//! Every line carries the plugin chat label so players can tell where a
//! restriction came from. Wording is part of the server's player-visible
//! surface; change it deliberately.

use st_core::{TagNotice, TAG_COOLDOWN_TICKS, TICKS_PER_SECOND};

use crate::command::CommandError;

/// Chat label prefixed to every plugin message.
pub const CHAT_LABEL: &str = "[SpawnTag]";

/// Attaches the plugin label to a bare message body.
pub fn labeled(body: &str) -> String {
    format!("{} {}", CHAT_LABEL, body)
}

pub fn tagged() -> String {
    labeled(&format!(
        "You've been tagged! Avoid being tagged for {} seconds to enter the spawn.",
        TAG_COOLDOWN_TICKS / TICKS_PER_SECOND
    ))
}

pub fn still_tagged() -> String {
    labeled("You're still tagged!")
}

pub fn no_longer_tagged() -> String {
    labeled("You're no longer tagged! You may enter the spawn.")
}

pub fn region_created(world: &str) -> String {
    labeled(&format!("Region around the spawn of {} created successfully.", world))
}

pub fn region_deleted(world: &str) -> String {
    labeled(&format!("Region around the spawn of {} deleted successfully.", world))
}

pub fn command_error(err: &CommandError) -> String {
    labeled(&format!("Error: {}.", err))
}

/// Renders a core notice into the line delivered to its player.
pub fn render_notice(notice: &TagNotice) -> String {
    match notice {
        TagNotice::Tagged { .. } => tagged(),
        TagNotice::StillTagged { .. } => still_tagged(),
        TagNotice::NoLongerTagged { .. } => no_longer_tagged(),
    }
}
