// Tests for the asset export helpers.

use lumiere::export::{asset_file_name, export_assets, render_asset, save_asset};
use lumiere::{AssetKind, AssetPayload, AudioPrompt, GenerationSession};

fn audio_prompt() -> AudioPrompt {
    AudioPrompt {
        style: "dark synth, slow tempo".to_string(),
        lyrics: "[Verse] Neon rain on empty streets\n[Chorus] We never sleep".to_string(),
    }
}

#[test]
fn asset_file_names_are_canonical() {
    assert_eq!(asset_file_name(AssetKind::Blueprint), "blueprint.md");
    assert_eq!(asset_file_name(AssetKind::AudioPrompt), "audio_prompt.json");
    assert_eq!(asset_file_name(AssetKind::Storyboard), "storyboard.txt");
}

#[test]
fn blueprint_is_written_verbatim() {
    let dir = tempfile::tempdir().expect("temp dir");
    let payload = AssetPayload::Blueprint("# Logline\n\nA heist in the rain.".to_string());

    let path = save_asset(&payload, dir.path()).expect("save should succeed");

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("blueprint.md")
    );
    let content = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(content, "# Logline\n\nA heist in the rain.");
}

#[test]
fn audio_prompt_is_written_as_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let prompt = audio_prompt();

    let path = save_asset(&AssetPayload::Audio(prompt.clone()), dir.path()).expect("save");

    let content = std::fs::read_to_string(&path).expect("read back");
    let parsed: AudioPrompt = serde_json::from_str(&content).expect("file should hold JSON");
    assert_eq!(parsed, prompt);
}

#[test]
fn save_creates_the_export_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let nested = dir.path().join("deep").join("out");
    let payload = AssetPayload::Storyboard("1. Wide shot of the skyline.".to_string());

    let path = save_asset(&payload, &nested).expect("save should succeed");

    assert!(path.starts_with(&nested));
    assert!(nested.join("storyboard.txt").exists());
}

#[test]
fn render_preserves_text_assets() {
    let text = "1. Wide shot.\n2. Close on Jane.";
    let rendered =
        render_asset(&AssetPayload::Storyboard(text.to_string())).expect("render should succeed");
    assert_eq!(rendered, text);
}

#[test]
fn export_writes_one_file_per_ready_slot() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut session = GenerationSession::begin(&[
        AssetKind::Blueprint,
        AssetKind::AudioPrompt,
        AssetKind::Storyboard,
    ]);
    session.record_success(AssetPayload::Blueprint("# Logline".to_string()));
    session.record_success(AssetPayload::Audio(audio_prompt()));
    session.record_success(AssetPayload::Storyboard("1. Wide shot.".to_string()));
    session.finalize();

    let written = export_assets(&session, dir.path());

    assert_eq!(written.len(), 3);
    for name in ["blueprint.md", "audio_prompt.json", "storyboard.txt"] {
        assert!(dir.path().join(name).exists(), "missing {}", name);
    }
}

#[test]
fn export_skips_slots_without_a_payload() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut session = GenerationSession::begin(&[
        AssetKind::Blueprint,
        AssetKind::AudioPrompt,
        AssetKind::Storyboard,
    ]);
    session.record_success(AssetPayload::Blueprint("# Logline".to_string()));
    session.record_failure(AssetKind::Storyboard, "HTTP 503 error");
    // The audio prompt slot is still pending.

    let written = export_assets(&session, dir.path());

    assert_eq!(written.len(), 1);
    assert!(dir.path().join("blueprint.md").exists());
    assert!(!dir.path().join("audio_prompt.json").exists());
    assert!(!dir.path().join("storyboard.txt").exists());
}
