//! Display helpers and the asset-missing fallback system.
use bevy::prelude::*;

use super::{
    events::{ImageLoadFailed, MascotCommand},
    resolver::ImageResolver,
    state::BubbleVisibility,
};

/// Requests the image for a logical display state.
pub fn set_display(
    state: &str,
    resolver: &ImageResolver,
    commands: &mut MessageWriter<MascotCommand>,
) {
    commands.write(MascotCommand::SetImage(resolver.resolve(state)));
}

pub fn show_user_bubble(
    text: impl Into<String>,
    bubbles: &mut BubbleVisibility,
    commands: &mut MessageWriter<MascotCommand>,
) {
    bubbles.user = true;
    commands.write(MascotCommand::ShowUserBubble(text.into()));
}

pub fn show_mascot_bubble(
    text: impl Into<String>,
    bubbles: &mut BubbleVisibility,
    commands: &mut MessageWriter<MascotCommand>,
) {
    bubbles.mascot = true;
    commands.write(MascotCommand::ShowMascotBubble(text.into()));
}

/// Hides both bubbles and reverts the image to `revert_state`.
pub fn hide_bubbles(
    bubbles: &mut BubbleVisibility,
    revert_state: &str,
    resolver: &ImageResolver,
    commands: &mut MessageWriter<MascotCommand>,
) {
    bubbles.user = false;
    bubbles.mascot = false;
    commands.write(MascotCommand::HideBubbles);
    set_display(revert_state, resolver, commands);
}

/// Startup: nothing visible, default image shown.
pub fn show_initial_display(
    resolver: Res<ImageResolver>,
    mut bubbles: ResMut<BubbleVisibility>,
    mut commands: MessageWriter<MascotCommand>,
) {
    hide_bubbles(&mut bubbles, "default", &resolver, &mut commands);
}

/// Handles presentation-layer reports of images that failed to load by
/// substituting the character's default image exactly once.
pub fn substitute_missing_images(
    resolver: Res<ImageResolver>,
    mut failures: MessageReader<ImageLoadFailed>,
    mut commands: MessageWriter<MascotCommand>,
) {
    for failure in failures.read() {
        match resolver.fallback_for(&failure.path) {
            Some(fallback) => {
                warn!(
                    "Image {} failed to load; substituting {}",
                    failure.path.display(),
                    fallback.display()
                );
                commands.write(MascotCommand::SetImage(fallback));
            }
            None => {
                warn!(
                    "Default image {} failed to load; no further fallback",
                    failure.path.display()
                );
            }
        }
    }
}
