//! Canvas layouts for the two render modes.
//!
//! A layout is built once for a given cell count and then fed a slice of
//! percentages every tick. Changing mode or granularity throws the layout away
//! and builds a new one.

use crate::aggregate::clamp_percent;
use crate::config::{bars, colors, heatmap};
use crate::system_info::RenderMode;
use eframe::egui::{pos2, vec2, Color32, Painter, Pos2, Rect, Stroke, Vec2};

/// Height of a bar for the given reading.
pub fn bar_height(percent: f32) -> f32 {
    clamp_percent(percent) / 100.0 * bars::MAX_BAR_HEIGHT
}

/// Black (idle) to pure red (saturated), red channel only.
pub fn heat_color(percent: f32) -> Color32 {
    let red = (clamp_percent(percent) / 100.0 * 255.0).round() as u8;
    Color32::from_rgb(red, 0, 0)
}

/// Side of the smallest square grid holding `cell_count` cells.
pub fn grid_side(cell_count: usize) -> usize {
    let mut side = (cell_count as f64).sqrt().ceil() as usize;
    while side * side < cell_count {
        side += 1;
    }
    side
}

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasLayout {
    Bars(BarCanvas),
    Heatmap(HeatmapCanvas),
}

impl CanvasLayout {
    pub fn build(mode: RenderMode, cell_count: usize) -> Self {
        match mode {
            RenderMode::Bars => CanvasLayout::Bars(BarCanvas::new(cell_count)),
            RenderMode::Heatmap => CanvasLayout::Heatmap(HeatmapCanvas::new(cell_count)),
        }
    }

    pub fn mode(&self) -> RenderMode {
        match self {
            CanvasLayout::Bars(_) => RenderMode::Bars,
            CanvasLayout::Heatmap(_) => RenderMode::Heatmap,
        }
    }

    /// Cells that display a reading (heatmap placeholders excluded).
    pub fn cell_count(&self) -> usize {
        match self {
            CanvasLayout::Bars(canvas) => canvas.slots.len(),
            CanvasLayout::Heatmap(canvas) => canvas.active_count(),
        }
    }

    pub fn size(&self) -> Vec2 {
        match self {
            CanvasLayout::Bars(canvas) => canvas.size,
            CanvasLayout::Heatmap(canvas) => canvas.size,
        }
    }

    /// Pushes one reading per cell. Cells without a matching value keep
    /// their previous reading.
    pub fn apply(&mut self, values: &[f32]) {
        match self {
            CanvasLayout::Bars(canvas) => canvas.apply(values),
            CanvasLayout::Heatmap(canvas) => canvas.apply(values),
        }
    }

    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        match self {
            CanvasLayout::Bars(canvas) => canvas.paint(painter, origin),
            CanvasLayout::Heatmap(canvas) => canvas.paint(painter, origin),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSlot {
    pub slot: Rect,
    pub percent: f32,
}

impl BarSlot {
    /// Foreground bar, anchored to the slot baseline and growing upward.
    pub fn bar_rect(&self) -> Rect {
        let bottom = self.slot.bottom() - bars::BAR_INSET;
        Rect::from_min_max(
            pos2(self.slot.left() + bars::BAR_INSET, bottom - bar_height(self.percent)),
            pos2(self.slot.right() - bars::BAR_INSET, bottom),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarCanvas {
    pub slots: Vec<BarSlot>,
    pub size: Vec2,
}

impl BarCanvas {
    pub fn new(cell_count: usize) -> Self {
        let pitch = bars::BAR_WIDTH + bars::BAR_SPACING;
        let top = bars::TOP_MARGIN;
        let bottom = top + bars::MAX_BAR_HEIGHT;

        let slots = (0..cell_count)
            .map(|i| {
                let x0 = bars::BAR_SPACING + i as f32 * pitch;
                BarSlot {
                    slot: Rect::from_min_max(pos2(x0, top), pos2(x0 + bars::BAR_WIDTH, bottom)),
                    percent: 0.0,
                }
            })
            .collect();

        BarCanvas {
            slots,
            size: vec2(
                cell_count as f32 * pitch + bars::BAR_SPACING,
                bars::MAX_BAR_HEIGHT + bars::CANVAS_EXTRA_HEIGHT,
            ),
        }
    }

    fn apply(&mut self, values: &[f32]) {
        for (slot, &value) in self.slots.iter_mut().zip(values) {
            slot.percent = value;
        }
    }

    fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        for slot in &self.slots {
            painter.rect(
                slot.slot.translate(offset),
                0.0,
                colors::BAR_SLOT,
                Stroke::new(1.0, colors::BAR_SLOT_OUTLINE),
            );
            if bar_height(slot.percent) > 0.0 {
                painter.rect_filled(slot.bar_rect().translate(offset), 0.0, colors::BAR_FILL);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HeatCell {
    Active { rect: Rect, color: Color32 },
    /// Trailing slot of a grid that is not a perfect square.
    Placeholder { rect: Rect },
}

impl HeatCell {
    pub fn rect(&self) -> Rect {
        match self {
            HeatCell::Active { rect, .. } | HeatCell::Placeholder { rect } => *rect,
        }
    }

    pub fn fill(&self) -> Color32 {
        match self {
            HeatCell::Active { color, .. } => *color,
            HeatCell::Placeholder { .. } => colors::CELL_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapCanvas {
    pub side: usize,
    pub cells: Vec<HeatCell>,
    pub size: Vec2,
}

impl HeatmapCanvas {
    pub fn new(cell_count: usize) -> Self {
        let side = grid_side(cell_count);
        let pitch = heatmap::CELL_SIZE + heatmap::CELL_SPACING;

        let cells = (0..side * side)
            .map(|i| {
                let (row, col) = (i / side, i % side);
                let min = pos2(
                    heatmap::CELL_SPACING + col as f32 * pitch,
                    heatmap::CELL_SPACING + row as f32 * pitch,
                );
                let rect = Rect::from_min_size(min, Vec2::splat(heatmap::CELL_SIZE));
                if i < cell_count {
                    HeatCell::Active {
                        rect,
                        color: Color32::BLACK,
                    }
                } else {
                    HeatCell::Placeholder { rect }
                }
            })
            .collect();

        let extent = side as f32 * pitch + heatmap::CELL_SPACING;
        HeatmapCanvas {
            side,
            cells,
            size: vec2(extent, extent + heatmap::CANVAS_EXTRA_HEIGHT),
        }
    }

    pub fn active_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, HeatCell::Active { .. }))
            .count()
    }

    fn apply(&mut self, values: &[f32]) {
        // Active cells always precede placeholders.
        for (cell, &value) in self.cells.iter_mut().zip(values) {
            if let HeatCell::Active { color, .. } = cell {
                *color = heat_color(value);
            }
        }
    }

    fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        for cell in &self.cells {
            painter.rect(
                cell.rect().translate(offset),
                0.0,
                cell.fill(),
                Stroke::new(1.0, colors::CELL_OUTLINE),
            );
        }
    }
}
