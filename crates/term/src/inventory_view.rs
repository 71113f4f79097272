//! InventoryView: maps an [`InventorySession`] into a terminal framebuffer.
//!
//! Pure (no I/O). Each grid cell is drawn as a `cell_w` x `cell_h` block of
//! characters. Stored items are filled with a color derived from their id and
//! labelled at their anchor cell. The held item floats at the cursor, tinted
//! by whether it lies within the grid there.

use crate::core::{placed_items, GridStore};
use crate::engine::{Highlight, InventorySession};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GridPos, ItemId, Rect};

const GRID_BG: Rgb = Rgb::new(30, 30, 40);
const DOT_FG: Rgb = Rgb::new(90, 90, 100);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const LABEL_FG: Rgb = Rgb::new(15, 15, 20);
const CURSOR_FG: Rgb = Rgb::new(255, 230, 90);
const HOVER_BG: Rgb = Rgb::new(240, 240, 240);
const BLOCKED_BG: Rgb = Rgb::new(190, 50, 50);

const PALETTE: [Rgb; 8] = [
    Rgb::new(80, 200, 220),
    Rgb::new(240, 210, 90),
    Rgb::new(190, 120, 220),
    Rgb::new(110, 210, 120),
    Rgb::new(230, 120, 90),
    Rgb::new(90, 130, 220),
    Rgb::new(250, 160, 40),
    Rgb::new(170, 170, 150),
];

/// Minimum panel width worth drawing.
const PANEL_MIN_W: u16 = 14;
const PANEL_GAP: u16 = 2;
const PANEL_RESERVED_W: u16 = 30;

const HELP: [&str; 6] = [
    "arrows/wasd move",
    "space  pick/drop",
    "r rotate  f auto",
    "n spawn  x trash",
    "tab    container",
    "q      quit",
];

/// Fill color for an item.
pub fn item_color(id: ItemId) -> Rgb {
    PALETTE[id.index() % PALETTE.len()]
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the active grid lands in the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Top-left corner of the border.
    pub x: u16,
    pub y: u16,
    pub cols: i32,
    pub rows: i32,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl GridLayout {
    pub fn frame_w(&self) -> u16 {
        to_u16(self.cols).saturating_mul(self.cell_w).saturating_add(2)
    }

    pub fn frame_h(&self) -> u16 {
        to_u16(self.rows).saturating_mul(self.cell_h).saturating_add(2)
    }

    /// Top-left character of grid cell `(cx, cy)`, or `None` outside the grid
    /// or past the addressable terminal area.
    pub fn cell_origin(&self, cx: i32, cy: i32) -> Option<(u16, u16)> {
        if cx < 0 || cy < 0 || cx >= self.cols || cy >= self.rows {
            return None;
        }
        let px = u16::try_from(cx)
            .ok()?
            .checked_mul(self.cell_w)?
            .checked_add(self.x)?
            .checked_add(1)?;
        let py = u16::try_from(cy)
            .ok()?
            .checked_mul(self.cell_h)?
            .checked_add(self.y)?
            .checked_add(1)?;
        Some((px, py))
    }

    /// Grid cells with at least one character inside a `width x height`
    /// framebuffer.
    pub fn visible_cells(&self, width: u16, height: u16) -> Rect {
        let span = |origin: u16, extent: u16, cell: u16, count: i32| {
            let room = extent.saturating_sub(origin.saturating_add(1));
            i32::from(room.div_ceil(cell.max(1))).min(count)
        };
        Rect::new(
            0,
            0,
            span(self.x, width, self.cell_w, self.cols),
            span(self.y, height, self.cell_h, self.rows),
        )
    }
}

fn to_u16(n: i32) -> u16 {
    u16::try_from(n.max(0)).unwrap_or(u16::MAX)
}

pub struct InventoryView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for InventoryView {
    fn default() -> Self {
        // 4x2 keeps cells roughly square with typical glyph aspect ratios.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl InventoryView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn layout(&self, grid: &GridStore, viewport: Viewport) -> GridLayout {
        let mut layout = GridLayout {
            x: 0,
            y: 0,
            cols: grid.width(),
            rows: grid.height(),
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        };
        let total_w = layout.frame_w().saturating_add(PANEL_RESERVED_W);
        layout.x = viewport.width.saturating_sub(total_w) / 2;
        layout.y = viewport.height.saturating_sub(layout.frame_h()) / 2;
        layout
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, session: &InventorySession, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let Some(grid) = session.active_grid() else {
            let msg = "NO CONTAINER OPEN";
            let x = viewport.width.saturating_sub(msg.len() as u16) / 2;
            fb.put_str(x, viewport.height / 2, msg, CellStyle::default().bold());
            return;
        };

        let layout = self.layout(grid, viewport);
        fb.draw_box(
            layout.x,
            layout.y,
            layout.frame_w(),
            layout.frame_h(),
            CellStyle::new(BORDER_FG, Rgb::default()),
        );

        self.draw_stored(fb, &layout, grid, session);
        match session.highlight() {
            Some(hl) if session.held().is_some() => self.draw_held(fb, &layout, session, hl),
            Some(hl) => self.tint(fb, &layout, hl.rect, HOVER_BG),
            None => {}
        }
        if session.held().is_none() {
            self.draw_cursor(fb, &layout, session.cursor());
        }

        self.draw_side_panel(fb, &layout, session, viewport);
    }

    pub fn render(&self, session: &InventorySession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_stored(
        &self,
        fb: &mut FrameBuffer,
        layout: &GridLayout,
        grid: &GridStore,
        session: &InventorySession,
    ) {
        let empty = CellStyle::new(DOT_FG, GRID_BG).dim();
        for GridPos { x, y } in layout.visible_cells(fb.width(), fb.height()).cells() {
            let Some((px, py)) = layout.cell_origin(x, y) else {
                continue;
            };
            match grid.get(x, y) {
                Some(id) => {
                    let style = CellStyle::new(LABEL_FG, item_color(id));
                    fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                }
                None => {
                    fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', empty);
                    fb.put_char(px, py, '·', empty);
                }
            }
        }

        for id in placed_items(grid, session.items()) {
            let Some(item) = session.item(id) else {
                continue;
            };
            if let Some(rect) = item.rect() {
                let style = CellStyle::new(LABEL_FG, item_color(id)).bold();
                self.label(fb, layout, rect, item.name(), style);
            }
        }
    }

    /// Held item drawn at the cursor, clipped to the grid area.
    fn draw_held(
        &self,
        fb: &mut FrameBuffer,
        layout: &GridLayout,
        session: &InventorySession,
        hl: Highlight,
    ) {
        let Some(item) = session.held_item() else {
            return;
        };
        let bg = if hl.fits {
            item_color(item.id())
        } else {
            BLOCKED_BG
        };
        let style = CellStyle::new(bg.darken(60), bg);

        let visible = layout.visible_cells(fb.width(), fb.height());
        for pos in hl.rect.intersection(&visible).into_iter().flat_map(|r| r.cells()) {
            if let Some((px, py)) = layout.cell_origin(pos.x, pos.y) {
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '▒', style);
            }
        }
        self.label(fb, layout, hl.rect, item.name(), CellStyle::new(LABEL_FG, bg).bold());
    }

    /// Item name along the top row of `rect`, truncated to its width.
    fn label(&self, fb: &mut FrameBuffer, layout: &GridLayout, rect: Rect, name: &str, style: CellStyle) {
        let Some((px, py)) = layout.cell_origin(rect.x, rect.y) else {
            return;
        };
        let visible_cols = to_u16(rect.right().min(layout.cols).saturating_sub(rect.x));
        let room = visible_cols.saturating_mul(self.cell_w).saturating_sub(1);
        let mut x = px;
        for ch in name.chars().take(room as usize) {
            if x >= fb.width() {
                break;
            }
            fb.put_char(x, py, ch, style);
            x += 1;
        }
    }

    /// Swap the background of every character under `rect`, keeping glyphs.
    fn tint(&self, fb: &mut FrameBuffer, layout: &GridLayout, rect: Rect, bg: Rgb) {
        let visible = layout.visible_cells(fb.width(), fb.height());
        for pos in rect.intersection(&visible).into_iter().flat_map(|r| r.cells()) {
            let Some((px, py)) = layout.cell_origin(pos.x, pos.y) else {
                continue;
            };
            for dy in 0..self.cell_h {
                for dx in 0..self.cell_w {
                    let (x, y) = (px.saturating_add(dx), py.saturating_add(dy));
                    if let Some(mut cell) = fb.get(x, y) {
                        cell.style.bg = bg;
                        fb.set(x, y, cell);
                    }
                }
            }
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, layout: &GridLayout, cursor: GridPos) {
        let Some((px, py)) = layout.cell_origin(cursor.x, cursor.y) else {
            return;
        };
        let bottom = py.saturating_add(self.cell_h - 1);
        let right = px.saturating_add(self.cell_w - 1);
        for (x, y, ch) in [(px, py, '┏'), (right, py, '┓'), (px, bottom, '┗'), (right, bottom, '┛')] {
            let bg = fb.get(x, y).map_or(GRID_BG, |c| c.style.bg);
            fb.put_char(x, y, ch, CellStyle::new(CURSOR_FG, bg).bold());
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        layout: &GridLayout,
        session: &InventorySession,
        viewport: Viewport,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w()).saturating_add(PANEL_GAP);
        if panel_x.saturating_add(PANEL_MIN_W) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::default());
        let dim = value.dim();

        let mut y = layout.y;

        fb.put_str(panel_x, y, "CONTAINER", label);
        let index = session.active_index().map_or(0, |i| i as i64 + 1);
        let x = fb.put_i64(panel_x, y + 1, index, value);
        let x = fb.put_str(x, y + 1, "/", dim);
        fb.put_i64(x, y + 1, session.grids().len() as i64, dim);
        y += 3;

        fb.put_str(panel_x, y, "VALUE", label);
        let x = fb.put_str(panel_x, y + 1, "$", value);
        fb.put_i64(x, y + 1, session.total_value(), value);
        y += 3;

        fb.put_str(panel_x, y, "ITEMS", label);
        let count = session
            .active_grid()
            .map_or(0, |g| placed_items(g, session.items()).len());
        fb.put_i64(panel_x, y + 1, count as i64, value);
        y += 3;

        fb.put_str(panel_x, y, "HAND", label);
        match session.held_item() {
            Some(item) => {
                let fp = item.footprint();
                let name_style = CellStyle::new(item_color(item.id()), Rgb::default()).bold();
                fb.put_str(panel_x, y + 1, item.name(), name_style);
                let x = fb.put_i64(panel_x, y + 2, fp.w as i64, dim);
                let x = fb.put_str(x, y + 2, "x", dim);
                let x = fb.put_i64(x, y + 2, fp.h as i64, dim);
                let x = fb.put_str(x, y + 2, "  $", dim);
                fb.put_i64(x, y + 2, item.cost(), dim);
            }
            None => {
                fb.put_str(panel_x, y + 1, "-", value);
            }
        }
        y += 4;

        fb.put_str(panel_x, y, "CURSOR", label);
        let cursor = session.cursor();
        let x = fb.put_i64(panel_x, y + 1, cursor.x as i64, value);
        let x = fb.put_str(x, y + 1, ",", value);
        fb.put_i64(x, y + 1, cursor.y as i64, value);
        y += 3;

        fb.put_str(panel_x, y, "KEYS", label);
        for line in HELP {
            y += 1;
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
        }
    }
}
