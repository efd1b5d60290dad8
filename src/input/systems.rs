//! Translates pointer input into mood and display effects.
use bevy::prelude::*;

use crate::{
    config::MascotConfig,
    display::{
        systems::set_display, ImageResolver, MascotCommand,
    },
    mood::Mood,
};

use super::{
    events::{PointerMoved, PrimaryPressed, PrimaryReleased, SecondaryPressed},
    state::InteractionState,
};

pub fn handle_primary_press(
    mut presses: MessageReader<PrimaryPressed>,
    mut interaction: ResMut<InteractionState>,
    mut mood: ResMut<Mood>,
    config: Res<MascotConfig>,
    resolver: Res<ImageResolver>,
    mut commands: MessageWriter<MascotCommand>,
) {
    for press in presses.read() {
        interaction.primary_held = true;
        interaction.drag_display_shown = false;
        mood.increase(config.interaction.click_mood_gain);
        set_display("tickle", &resolver, &mut commands);
        debug!(
            "Primary press at ({:.0}, {:.0}); mood now {}",
            press.x,
            press.y,
            mood.value()
        );
    }
}

pub fn handle_pointer_motion(
    mut moves: MessageReader<PointerMoved>,
    mut interaction: ResMut<InteractionState>,
    resolver: Res<ImageResolver>,
    mut commands: MessageWriter<MascotCommand>,
) {
    for sample in moves.read() {
        interaction.dragging = sample.dragging && sample.primary_held;
        if interaction.dragging {
            if !interaction.drag_display_shown {
                interaction.drag_display_shown = true;
                set_display("happy", &resolver, &mut commands);
            }
        } else {
            interaction.drag_display_shown = false;
        }
    }
}

pub fn handle_primary_release(
    mut releases: MessageReader<PrimaryReleased>,
    mut interaction: ResMut<InteractionState>,
    resolver: Res<ImageResolver>,
    mut commands: MessageWriter<MascotCommand>,
) {
    if releases.read().next().is_none() {
        return;
    }
    if interaction.primary_held {
        set_display("default", &resolver, &mut commands);
    }
    interaction.primary_held = false;
    interaction.dragging = false;
    interaction.drag_display_shown = false;
}

pub fn handle_secondary_press(
    mut presses: MessageReader<SecondaryPressed>,
    mut commands: MessageWriter<MascotCommand>,
) {
    for press in presses.read() {
        commands.write(MascotCommand::ShowContextMenu {
            x: press.x,
            y: press.y,
        });
    }
}
