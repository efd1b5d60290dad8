//! Dispatches button-triggered conversations.
use bevy::prelude::*;
use chrono::Local;

use crate::{
    config::MascotConfig,
    content::{Category, ContentBundle},
    display::{
        systems::{set_display, show_mascot_bubble, show_user_bubble},
        BubbleVisibility, ImageResolver, MascotCommand,
    },
    input::ConversationButtonPressed,
    scheduler::MascotTimers,
};

use super::engine;

pub fn handle_conversation_buttons(
    mut presses: MessageReader<ConversationButtonPressed>,
    bundle: Res<ContentBundle>,
    config: Res<MascotConfig>,
    resolver: Res<ImageResolver>,
    mut bubbles: ResMut<BubbleVisibility>,
    mut timers: ResMut<MascotTimers>,
    mut commands: MessageWriter<MascotCommand>,
) {
    for press in presses.read() {
        let category = press.category;
        let mut rng = rand::rng();

        let prompt = engine::prompt_line(&bundle, category);
        let reply = match category {
            Category::Time => engine::time_line(&bundle, Local::now().time(), &mut rng),
            _ => engine::response_line(&bundle, category, &mut rng),
        };

        show_user_bubble(prompt, &mut bubbles, &mut commands);
        show_mascot_bubble(reply, &mut bubbles, &mut commands);
        set_display(category.display_state(), &resolver, &mut commands);

        // A new conversation supersedes any pending auto-hide.
        timers.arm_auto_hide(config.timers.auto_hide);
        info!("{} conversation dispatched", category.prompt_key());
    }
}
