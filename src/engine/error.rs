use thiserror::Error;

/// Faults that end the session: the scene cannot be presented as configured,
/// so the app reports the cause and exits instead of rendering a partial
/// scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// An asset path failed to load or decode.
    #[error("failed to load asset: {path}")]
    AssetLoad { path: String },

    /// The model loaded, but the export does not contain every node the
    /// material bindings expect.
    #[error("model is missing expected nodes: {}", missing.join(", "))]
    StructuralMismatch { missing: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_mismatch_names_every_missing_node() {
        let err = SceneError::StructuralMismatch {
            missing: vec!["water".to_string(), "windowLight".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("water"));
        assert!(message.contains("windowLight"));
    }

    #[test]
    fn asset_load_names_the_path() {
        let err = SceneError::AssetLoad {
            path: "portal/scene.glb".to_string(),
        };
        assert!(err.to_string().contains("portal/scene.glb"));
    }
}
