use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Scene configuration loaded from `assets/portal/manifest.json`.
/// Mirrors the JSON structure exactly.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct SceneManifest {
    /// Binary glTF containing the baked scene.
    pub model: String,
    /// Baked lighting texture, sampled in sRGB.
    pub baked_texture: String,
    pub clear_color: [f32; 3],
    pub portal_color_start: [f32; 3],
    pub portal_color_end: [f32; 3],
    pub firefly_size: f32,
}

impl SceneManifest {
    pub fn clear_color(&self) -> Color {
        let [r, g, b] = self.clear_color;
        Color::srgb(r, g, b)
    }

    pub fn portal_color_start(&self) -> Color {
        let [r, g, b] = self.portal_color_start;
        Color::srgb(r, g, b)
    }

    pub fn portal_color_end(&self) -> Color {
        let [r, g, b] = self.portal_color_end;
        Color::srgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SceneManifest {
        SceneManifest {
            model: "portal/scene.glb".to_string(),
            baked_texture: "portal/baked.jpg".to_string(),
            clear_color: [0.004, 0.173, 0.275],
            portal_color_start: [0.0, 0.0, 0.0],
            portal_color_end: [1.0, 1.0, 1.0],
            firefly_size: 200.0,
        }
    }

    #[test]
    fn manifest_round_trips_through_json() {
        let manifest = sample();
        let json = serde_json::to_string(&manifest).expect("serialize");
        let back: SceneManifest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.model, manifest.model);
        assert_eq!(back.baked_texture, manifest.baked_texture);
        assert_eq!(back.firefly_size, manifest.firefly_size);
        assert_eq!(back.clear_color, manifest.clear_color);
    }

    #[test]
    fn manifest_parses_the_shipped_field_names() {
        let json = r#"{
            "model": "portal/scene.glb",
            "baked_texture": "portal/baked.jpg",
            "clear_color": [0.004, 0.173, 0.275],
            "portal_color_start": [0.0, 0.0, 0.0],
            "portal_color_end": [1.0, 1.0, 1.0],
            "firefly_size": 200.0
        }"#;
        let manifest: SceneManifest = serde_json::from_str(json).expect("deserialize");
        assert_eq!(manifest.model, "portal/scene.glb");
        assert_eq!(manifest.firefly_size, 200.0);
    }

    #[test]
    fn colour_accessors_map_channels_in_order() {
        let manifest = SceneManifest {
            clear_color: [0.25, 0.5, 0.75],
            ..sample()
        };
        let srgba = manifest.clear_color().to_srgba();
        assert_eq!(srgba.red, 0.25);
        assert_eq!(srgba.green, 0.5);
        assert_eq!(srgba.blue, 0.75);
    }
}
