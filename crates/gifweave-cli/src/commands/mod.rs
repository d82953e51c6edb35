pub mod combine;
pub mod create;
pub mod decompose;
pub mod info;
pub mod trim;

use clap::Args;

use gifweave_core::ops::{resolve_target_size, SizeRange};
use gifweave_core::sequence::Size;

/// Output size flags shared by `create` and `decompose`.
#[derive(Args, Debug, Clone, Default)]
pub struct SizeArgs {
    /// Output width in pixels (16-4096)
    #[arg(long, value_parser = clap::value_parser!(u32).range(16..=4096))]
    pub width: Option<u32>,

    /// Output height in pixels (16-4096)
    #[arg(long, value_parser = clap::value_parser!(u32).range(16..=4096))]
    pub height: Option<u32>,

    /// Derive the missing dimension from the reference image's aspect ratio
    #[arg(long)]
    pub keep_aspect: bool,
}

impl SizeArgs {
    /// True when any resize was requested.
    pub fn requested(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }

    /// Resolve the flags against a reference size.
    pub fn resolve(&self, reference: Option<Size>) -> Option<Size> {
        resolve_target_size(
            self.width,
            self.height,
            self.keep_aspect,
            reference,
            SizeRange::default(),
        )
    }
}
