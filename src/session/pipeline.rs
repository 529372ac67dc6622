use tracing::debug;

use crate::{
    assets::codec::{OutputFormat, decode_image},
    compile::plan::{ApplicationOrder, compile_plan},
    effects::apply_plan,
    foundation::{core::CropRect, error::FacepaintResult},
    geometry::bounds::face_crop,
    landmarks::{
        detector::{Detection, LandmarkDetector},
        model::FaceGeometry,
    },
    makeup::{
        config::brow,
        model::{EffectOverride, MakeupProduct},
    },
    render::surface::Surface,
};

/// Options controlling [`MakeupPipeline`] behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineOpts {
    /// Order in which resolved effects are applied.
    pub order: ApplicationOrder,
    /// Output container for the composited image.
    pub output: OutputFormat,
    /// Seed for the brow hair generator.
    pub brow_seed: u64,
}

impl Default for PipelineOpts {
    fn default() -> Self {
        Self {
            order: ApplicationOrder::Canonical,
            output: OutputFormat::Png,
            brow_seed: brow::DEFAULT_SEED,
        }
    }
}

impl PipelineOpts {
    /// Defaults overlaid with `FACEPAINT_ORDER`, `FACEPAINT_OUTPUT`, `FACEPAINT_JPEG_QUALITY` and
    /// `FACEPAINT_BROW_SEED`. Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut opts = Self::default();
        let order = get("FACEPAINT_ORDER")
            .and_then(|v| ApplicationOrder::parse(&v));
        if let Some(order) = order {
            opts.order = order;
        }
        let quality = get("FACEPAINT_JPEG_QUALITY")
            .and_then(|v| v.trim().parse::<u8>().ok())
            .filter(|q| (1..=100).contains(q))
            .unwrap_or(OutputFormat::DEFAULT_JPEG_QUALITY);
        let output = get("FACEPAINT_OUTPUT")
            .and_then(|v| OutputFormat::parse(&v, quality));
        if let Some(output) = output {
            opts.output = output;
        }
        let seed = get("FACEPAINT_BROW_SEED")
            .and_then(|v| v.trim().parse::<u64>().ok());
        if let Some(seed) = seed {
            opts.brow_seed = seed;
        }
        opts
    }

    /// Replace the application order.
    pub fn with_order(mut self, order: ApplicationOrder) -> Self {
        self.order = order;
        self
    }

    /// Replace the output container.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Replace the brow hair seed.
    pub fn with_brow_seed(mut self, seed: u64) -> Self {
        self.brow_seed = seed;
        self
    }
}

/// Output of one [`MakeupPipeline::apply_effects`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderResult {
    /// Encoded image. When no face was found, the caller's original bytes.
    pub image_data: Vec<u8>,
    /// Whether the detector found a face.
    pub face_detected: bool,
    /// Padded face rectangle for display framing; present iff a face was found.
    pub face_crop: Option<CropRect>,
}

/// Decode, detect, composite and encode, driving one caller-owned detector.
///
/// The pipeline holds no state between calls besides the detector; every call builds its own
/// surface and landmark view.
pub struct MakeupPipeline<D> {
    detector: D,
    opts: PipelineOpts,
    initialized: bool,
}

impl<D: LandmarkDetector> MakeupPipeline<D> {
    /// Wrap `detector`; it is initialized on [`initialize`](Self::initialize) or the first call.
    pub fn new(detector: D, opts: PipelineOpts) -> Self {
        Self {
            detector,
            opts,
            initialized: false,
        }
    }

    /// Options fixed at construction.
    pub fn opts(&self) -> &PipelineOpts {
        &self.opts
    }

    /// The wrapped detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Whether the detector has been initialized and not shut down since.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Initialize the detector if it is not already.
    pub fn initialize(&mut self) -> FacepaintResult<()> {
        if !self.initialized {
            self.detector.initialize()?;
            self.initialized = true;
            debug!("detector initialized");
        }
        Ok(())
    }

    /// Apply `products` (adjusted by `overrides`) to the image in `source`.
    ///
    /// Fails only when decoding, detection, surface setup or encoding fails. A missing face returns
    /// the input bytes untouched with `face_detected: false`.
    #[tracing::instrument(
        skip_all,
        fields(bytes = source.len(), products = products.len(), overrides = overrides.len())
    )]
    pub fn apply_effects(
        &mut self,
        source: &[u8],
        products: &[MakeupProduct],
        overrides: &[EffectOverride],
    ) -> FacepaintResult<RenderResult> {
        let image = decode_image(source)?;
        self.initialize()?;

        let landmarks = match self.detector.detect(&image)? {
            Detection::Face(landmarks) => landmarks,
            Detection::NoFace => {
                debug!("no face detected; returning source unchanged");
                return Ok(RenderResult {
                    image_data: source.to_vec(),
                    face_detected: false,
                    face_crop: None,
                });
            }
        };

        let plan = compile_plan(products, overrides, self.opts.order);
        let mut surface = Surface::from_image(&image)?;
        let face = FaceGeometry::new(&landmarks, image.width, image.height);
        apply_plan(&mut surface, &face, &plan, self.opts.brow_seed);
        debug!(effects = plan.len(), "composited");

        Ok(RenderResult {
            image_data: surface.encode(self.opts.output)?,
            face_detected: true,
            face_crop: Some(face_crop(&landmarks, image.width, image.height)),
        })
    }

    /// Close the detector. A later call re-initializes it.
    pub fn shutdown(&mut self) {
        if self.initialized {
            self.detector.close();
            self.initialized = false;
            debug!("detector closed");
        }
    }

    /// Shut down and hand the detector back.
    pub fn into_detector(mut self) -> D {
        self.shutdown();
        self.detector
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/pipeline.rs"]
mod tests;
