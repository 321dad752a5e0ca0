use std::path::Path;

use crate::{
    color::palette::Palette,
    data::{normalize::NormalizedRow, row::Dataset},
    foundation::{
        core::CanvasSize,
        error::{DatapaintError, DatapaintResult},
    },
    random::stream::SeededStream,
    render::{
        CanvasRGBA,
        composite::{apply_mask_in_place, over_in_place},
        cpu::PaintLayer,
        mark::{Mark, MarkSink},
        mask::{Mask, VignetteSettings},
    },
    shapes::{MarkParams, ShapeKind},
};

pub const DEFAULT_BACKGROUND: [u8; 4] = [250, 250, 252, 255];

/// Everything that shapes a painting besides the data itself.
///
/// Missing JSON keys take their defaults, so `{}` is a valid settings file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub canvas: CanvasSize,
    /// Opaque background color. The alpha channel must be 255.
    pub background_rgba: [u8; 4],
    /// Field holding the shape tag of each row.
    pub shape_field: String,
    /// Field whose numeric value orders the rows, when present.
    pub order_field: String,
    pub vignette: VignetteSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            background_rgba: DEFAULT_BACKGROUND,
            shape_field: "shape".to_string(),
            order_field: "z".to_string(),
            vignette: VignetteSettings::default(),
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> DatapaintResult<()> {
        self.canvas.validate()?;
        if self.background_rgba[3] != 255 {
            return Err(DatapaintError::validation(
                "background_rgba must be opaque (alpha 255)",
            ));
        }
        if self.shape_field.is_empty() || self.order_field.is_empty() {
            return Err(DatapaintError::validation(
                "shape_field and order_field must be non-empty",
            ));
        }
        self.vignette.validate()
    }

    pub fn from_json_str(text: &str) -> DatapaintResult<Self> {
        let settings: Self =
            serde_json::from_str(text).map_err(|e| DatapaintError::serde(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: &Path) -> DatapaintResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            DatapaintError::serde(format!("read settings '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Fields that never feed the numeric parameter vector.
    fn excluded_fields(&self) -> [&str; 2] {
        [self.shape_field.as_str(), self.order_field.as_str()]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub rows: usize,
    pub marks: usize,
    /// Rows painted per shape kind, indexed by [`ShapeKind::index`].
    pub per_kind: [usize; 6],
}

impl RenderStats {
    pub fn rows_of(&self, kind: ShapeKind) -> usize {
        self.per_kind[kind.index()]
    }
}

/// The per-row decisions: which shape, with which parameters, from which stream.
#[derive(Clone, Debug, PartialEq)]
pub struct RowPlan {
    pub kind: ShapeKind,
    pub params: MarkParams,
    pub seed: String,
}

impl RowPlan {
    pub fn stream(&self) -> SeededStream {
        SeededStream::new(&self.seed)
    }

    pub fn paint<S: MarkSink + ?Sized>(&self, sink: &mut S) {
        self.kind.render(sink, &self.params, &mut self.stream());
    }

    /// Records the marks this row would paint, without rasterizing.
    pub fn marks(&self) -> Vec<Mark> {
        let mut out = Vec::new();
        self.paint(&mut out);
        out
    }
}

/// Plans every row of `dataset`, in processing order.
pub fn plan_rows(dataset: &Dataset, settings: &RenderSettings) -> Vec<RowPlan> {
    let palette = Palette::from_source_text(&dataset.source_text);
    let excluded = settings.excluded_fields();

    dataset
        .processing_order(&settings.order_field)
        .into_iter()
        .map(|idx| {
            let row = &dataset.rows[idx];
            let seed = row.seed_string();
            let norm = NormalizedRow::from_row(row, &excluded);
            let color = palette.color_for(&seed);
            let tag = row.get(&settings.shape_field).map(|v| v.as_tag());
            RowPlan {
                kind: ShapeKind::from_tag(tag.as_deref()),
                params: MarkParams::from_normalized(&norm, settings.canvas, color),
                seed,
            }
        })
        .collect()
}

/// Paint every row of `dataset` and composite the result.
///
/// Pipeline:
/// 1. palette from the verbatim source text
/// 2. rows in processing order, each painted onto one shared layer
/// 3. vignette mask applied to the layer
/// 4. masked layer composited over the opaque background
pub fn render_painting(
    dataset: &Dataset,
    settings: &RenderSettings,
) -> DatapaintResult<CanvasRGBA> {
    render_painting_with_stats(dataset, settings).map(|(canvas, _)| canvas)
}

#[tracing::instrument(skip(dataset, settings), fields(rows = dataset.rows.len()))]
pub fn render_painting_with_stats(
    dataset: &Dataset,
    settings: &RenderSettings,
) -> DatapaintResult<(CanvasRGBA, RenderStats)> {
    settings.validate()?;

    let mut layer = PaintLayer::new(settings.canvas)?;
    let mut stats = RenderStats::default();
    for (i, plan) in plan_rows(dataset, settings).iter().enumerate() {
        tracing::trace!(row = i, kind = %plan.kind, "painting row");
        plan.paint(&mut layer);
        stats.rows += 1;
        stats.per_kind[plan.kind.index()] += 1;
    }
    stats.marks = layer.marks_painted();

    let mut paint = layer.finish();
    let mask = Mask::vignette(settings.canvas, &settings.vignette)?;
    apply_mask_in_place(&mut paint, &mask.data)?;

    let mut data = settings
        .background_rgba
        .repeat(settings.canvas.pixel_count()?);
    over_in_place(&mut data, &paint)?;

    tracing::debug!(rows = stats.rows, marks = stats.marks, "painting composited");
    Ok((
        CanvasRGBA {
            width: settings.canvas.width,
            height: settings.canvas.height,
            data,
        },
        stats,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
