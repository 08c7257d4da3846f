//! Instruction templates for the remote generation calls.
//!
//! Every piece of domain knowledge lives in these natural-language
//! instructions; the surrounding code only routes text. Each asset
//! template carries a `{theme}` slot filled by substring substitution
//! at request time.

use lumiere_core::AssetKind;

/// Placeholder replaced with the caller's theme.
const THEME_SLOT: &str = "{theme}";

/// Instruction template for the cinematic blueprint generator.
pub const BLUEPRINT_TEMPLATE: &str = "You are a film development executive. \
    Read the script you are given and produce a cinematic blueprint for a \
    production in the style of {theme}. Respond in Markdown with these \
    sections: Logline, Synopsis, Setting, Main Characters, Tone and Visual \
    Language, and Key Scenes. Ground every section in the script itself and \
    let the {theme} aesthetic shape the imagery. Output only the blueprint.";

/// Instruction template for the soundtrack prompt generator.
pub const AUDIO_TEMPLATE: &str = "You are a music director scoring a {theme} \
    production. Read the script you are given and design one soundtrack cue \
    that captures its emotional core. Describe the musical style as a single \
    dense phrase suitable for a music generation service, and write complete \
    song lyrics with section markers such as [Verse] and [Chorus]. Keep the \
    lyrics grounded in the script's own imagery.";

/// Instruction template for the storyboard prompt generator.
pub const STORYBOARD_TEMPLATE: &str = "You are a storyboard artist working \
    in a {theme} visual style. Break the script you are given into a numbered \
    list of shots. For each shot write one line covering camera framing, \
    subject, action, and mood, phrased as a prompt for an image generation \
    service. Cover the whole script in order and output only the numbered \
    list.";

/// Instruction template for short script feedback. Takes no theme.
pub const GUIDANCE_TEMPLATE: &str = "You are a script doctor. Give short, \
    direct feedback on the script you are given: what works, what does not, \
    and the single most useful improvement. Three sentences at most, no \
    preamble.";

/// Instruction for a kind, with the theme substituted in.
pub fn instruction_for(kind: AssetKind, theme: &str) -> String {
    let template = match kind {
        AssetKind::Blueprint => BLUEPRINT_TEMPLATE,
        AssetKind::AudioPrompt => AUDIO_TEMPLATE,
        AssetKind::Storyboard => STORYBOARD_TEMPLATE,
    };
    template.replace(THEME_SLOT, theme)
}

/// Instruction for the guidance requester.
pub fn guidance_instruction() -> String {
    GUIDANCE_TEMPLATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn theme_is_substituted_into_every_asset_template() {
        for kind in AssetKind::iter() {
            let instruction = instruction_for(kind, "Cyberpunk Noir");
            assert!(
                instruction.contains("Cyberpunk Noir"),
                "{} instruction should carry the theme",
                kind
            );
            assert!(
                !instruction.contains(THEME_SLOT),
                "{} instruction should not leak the placeholder",
                kind
            );
        }
    }

    #[test]
    fn asset_templates_are_distinct() {
        let blueprint = instruction_for(AssetKind::Blueprint, "Noir");
        let audio = instruction_for(AssetKind::AudioPrompt, "Noir");
        let storyboard = instruction_for(AssetKind::Storyboard, "Noir");
        assert_ne!(blueprint, audio);
        assert_ne!(audio, storyboard);
        assert_ne!(blueprint, storyboard);
    }

    #[test]
    fn guidance_instruction_has_no_theme_slot() {
        assert!(!guidance_instruction().contains(THEME_SLOT));
    }
}
