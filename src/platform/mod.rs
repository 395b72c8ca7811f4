//! Platform abstraction layer
//!
//! Browser glue for:
//! - Image loading (all-settled gate feeding `AssetRegistry`)
//! - Canvas2D rendering of `FrameView`
//!
//! Native builds have no platform layer; the simulation runs headless.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod images;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
#[cfg(target_arch = "wasm32")]
pub use images::load_all;

/// Directory image keys are resolved against
pub const ASSET_BASE: &str = "assets/";

/// URL for an asset key
pub fn asset_url(key: &str) -> String {
    format!("{ASSET_BASE}{key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url() {
        assert_eq!(asset_url("venom.png"), "assets/venom.png");
    }
}
