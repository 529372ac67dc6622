use kurbo::{PathEl, Shape};

use crate::{
    assets::codec::{self, DecodedImage, OutputFormat},
    color::hex::Rgba,
    foundation::{
        core::{BezPath, Point, Rect},
        error::{FacepaintError, FacepaintResult},
    },
    render::{
        blend::{BlendMode, composite_in_place},
        paint::Paint,
    },
};

/// Filled path plus the straight-alpha color it is painted with.
#[derive(Clone, Debug)]
pub struct ColoredPath {
    /// Outline, filled non-zero.
    pub path: BezPath,
    /// Fill color.
    pub color: Rgba,
}

/// Mutable premultiplied RGBA8 canvas that effect renderers paint into.
///
/// Every draw call rasterizes into a transparent layer the size of the surface and composites that
/// layer once with a blend mode and opacity, so overlapping shapes within one call never stack.
pub struct Surface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
    ctx: Option<vello_cpu::RenderContext>,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// Copy a decoded image into a new surface.
    pub fn from_image(image: &DecodedImage) -> FacepaintResult<Self> {
        let (width, height) = surface_dims(image.width, image.height)?;
        let expected = usize::from(width) * usize::from(height) * 4;
        if image.rgba8_premul.len() != expected {
            return Err(FacepaintError::render(format!(
                "image buffer has {} bytes, expected {expected}",
                image.rgba8_premul.len()
            )));
        }
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        pixmap
            .data_as_u8_slice_mut()
            .copy_from_slice(&image.rgba8_premul);
        Ok(Self {
            width,
            height,
            pixmap,
            ctx: None,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Premultiplied RGBA8 pixels, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Encode the current pixels.
    pub fn encode(&self, format: OutputFormat) -> FacepaintResult<Vec<u8>> {
        codec::encode_image(self.data(), self.width(), self.height(), format)
    }

    /// Paint one path with a solid color.
    pub fn fill(&mut self, path: &BezPath, color: Rgba, blend: BlendMode, opacity: f32) {
        self.fill_shapes(
            &[ColoredPath {
                path: path.clone(),
                color,
            }],
            blend,
            opacity,
        );
    }

    /// Paint several solid shapes into one layer, then composite the layer.
    pub fn fill_shapes(&mut self, shapes: &[ColoredPath], blend: BlendMode, opacity: f32) {
        let shapes: Vec<&ColoredPath> = shapes
            .iter()
            .filter(|s| !s.path.elements().is_empty() && s.color.alpha_u8() > 0)
            .collect();
        if shapes.is_empty() || opacity <= 0.0 {
            return;
        }

        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        self.with_ctx_mut(|ctx| {
            for shape in &shapes {
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    shape.color.r,
                    shape.color.g,
                    shape.color.b,
                    shape.color.alpha_u8(),
                ));
                ctx.fill_path(&bezpath_to_cpu(&shape.path));
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut layer);
        });
        composite_in_place(
            self.pixmap.data_as_u8_slice_mut(),
            layer.data_as_u8_slice(),
            opacity,
            blend,
        );
    }

    /// Paint `paint` through the coverage of `mask`, optionally intersected with `clip`.
    pub fn fill_masked(
        &mut self,
        mask: &BezPath,
        clip: Option<&BezPath>,
        paint: &Paint,
        blend: BlendMode,
        opacity: f32,
    ) {
        if mask.elements().is_empty() || opacity <= 0.0 {
            return;
        }
        let mut region = mask.bounding_box();
        if let Some(clip) = clip {
            region = region.intersect(clip.bounding_box());
        }
        let Some((x0, y0, x1, y1)) = self.pixel_span(region) else {
            return;
        };

        let coverage = self.coverage(mask);
        let clip_coverage = clip.map(|c| self.coverage(c));

        let w = usize::from(self.width);
        let mut layer = vec![0u8; w * usize::from(self.height) * 4];
        for y in y0..y1 {
            for x in x0..x1 {
                let idx = (y * w + x) * 4;
                let mut cov = coverage[idx + 3];
                if let Some(clip) = &clip_coverage {
                    cov = crate::foundation::math::mul_div255_u8(
                        u16::from(cov),
                        u16::from(clip[idx + 3]),
                    );
                }
                if cov == 0 {
                    continue;
                }
                let c = paint
                    .sample(Point::new(x as f64 + 0.5, y as f64 + 0.5))
                    .to_premul()
                    .scaled(f32::from(cov) / 255.0);
                layer[idx..idx + 4].copy_from_slice(&[c.r, c.g, c.b, c.a]);
            }
        }
        composite_in_place(self.pixmap.data_as_u8_slice_mut(), &layer, opacity, blend);
    }

    /// Rasterize `path` in opaque white; the alpha channel is the anti-aliased coverage.
    fn coverage(&mut self, path: &BezPath) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.with_ctx_mut(|ctx| {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
            ctx.fill_path(&bezpath_to_cpu(path));
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
        });
        pixmap.data_as_u8_slice().to_vec()
    }

    /// Integer pixel range covering `r`, clamped to the surface; `None` when empty.
    fn pixel_span(&self, r: Rect) -> Option<(usize, usize, usize, usize)> {
        let clamp = |v: f64, max: u16| -> usize { v.clamp(0.0, f64::from(max)) as usize };
        let x0 = clamp(r.x0.floor(), self.width);
        let y0 = clamp(r.y0.floor(), self.height);
        let x1 = clamp(r.x1.ceil(), self.width);
        let y1 = clamp(r.y1.ceil(), self.height);
        (x1 > x0 && y1 > y0).then_some((x0, y0, x1, y1))
    }

    fn with_ctx_mut<R>(&mut self, f: impl FnOnce(&mut vello_cpu::RenderContext) -> R) -> R {
        let (width, height) = (self.width, self.height);
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        let out = f(&mut ctx);
        self.ctx = Some(ctx);
        out
    }
}

fn surface_dims(width: u32, height: u32) -> FacepaintResult<(u16, u16)> {
    let w: u16 = width
        .try_into()
        .map_err(|_| FacepaintError::render("surface width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| FacepaintError::render("surface height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(FacepaintError::render("surface has zero area"));
    }
    Ok((w, h))
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
