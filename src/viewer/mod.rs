//! WASM-exported `CellGridView`, a `CellGrid` drawing into an HTML canvas.
//!
//! Pointer coordinates are expected in canvas logical pixels; wiring them to
//! DOM events is left to the page.
//!
//! ```javascript
//! import init, { CellGridView } from 'cellgrid';
//! await init();
//! const view = new CellGridView(canvas, '{"num_rows": 2, "num_cols": 2}');
//! view.add_text_cell(0, 0, "hello");
//! view.add_circles_cell(1, 1, [5, 5, 5], 20, 0, 2, 2, (event, idx) => console.log(event, idx));
//! view.render();
//! canvas.addEventListener('mousemove', (e) => view.mouse_move(e.offsetX, e.offsetY));
//! ```

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::cell::{Circle, CirclesCell, Subcell, TextCell};
use crate::config::GridConfig;
use crate::grid::CellGrid;
use crate::render::CanvasSink;
use crate::types::{CellSlotId, ColId, RowId, Vector2d};

/// Sub-element that reports its events to a JS callback as
/// `callback(event_name, circle_index)`.
struct JsSubcell {
    callback: Function,
    index: u32,
}

impl JsSubcell {
    fn emit(&self, event: &str) {
        if let Err(err) = self.callback.call2(
            &JsValue::NULL,
            &JsValue::from_str(event),
            &JsValue::from(self.index),
        ) {
            tracing::warn!(?err, event, index = self.index, "subcell callback threw");
        }
    }
}

impl Subcell for JsSubcell {
    fn on_right_click(&mut self) {
        self.emit("right_click");
    }

    fn on_left_click(&mut self) {
        self.emit("left_click");
    }

    fn on_hover(&mut self) {
        self.emit("hover");
    }

    fn on_unhover(&mut self) {
        self.emit("unhover");
    }
}

#[wasm_bindgen]
pub struct CellGridView {
    grid: CellGrid<CanvasSink>,
}

#[wasm_bindgen]
impl CellGridView {
    /// Create a view over `canvas` from a JSON `GridConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: &str) -> Result<CellGridView, JsValue> {
        console_error_panic_hook::set_once();
        let config = GridConfig::from_json(config_json)?;
        let sink = CanvasSink::new(canvas)?;
        Ok(Self {
            grid: CellGrid::new(sink, config)?,
        })
    }

    /// Set the CSS font for text cells. Text sizes change, so the layout is
    /// recomputed on the next render.
    pub fn set_font(&mut self, font: &str) {
        self.grid.sink_mut().set_font(font);
        self.grid.invalidate();
    }

    /// Place a text cell and return its slot.
    pub fn add_text_cell(&mut self, row: u32, col: u32, text: &str) -> Result<u32, JsValue> {
        let slot = self
            .grid
            .add_cell(RowId::new(row), ColId::new(col), TextCell::new(text))?;
        Ok(slot.get())
    }

    /// Place a circle cell with one circle per entry of `radii`. Every
    /// circle reports to `callback(event_name, circle_index)`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_circles_cell(
        &mut self,
        row: u32,
        col: u32,
        radii: Vec<f64>,
        spacing_x: f64,
        spacing_y: f64,
        padding_x: f64,
        padding_y: f64,
        callback: Function,
    ) -> Result<u32, JsValue> {
        let mut cell = CirclesCell::new(
            Vector2d::new(spacing_x, spacing_y),
            Vector2d::new(padding_x, padding_y),
        );
        for (index, radius) in (0u32..).zip(radii) {
            cell.push(Circle::new(
                radius,
                JsSubcell {
                    callback: callback.clone(),
                    index,
                },
            ));
        }
        let slot = self
            .grid
            .add_cell(RowId::new(row), ColId::new(col), cell)?;
        Ok(slot.get())
    }

    pub fn render(&mut self) {
        self.grid.full_render();
    }

    pub fn render_cell(&mut self, slot: u32) -> Result<(), JsValue> {
        self.grid.render_cell(CellSlotId::new(slot))?;
        Ok(())
    }

    /// Pointer moved. Redraws the cells whose hover state may have changed
    /// and returns the slot under the pointer.
    pub fn mouse_move(&mut self, x: f64, y: f64) -> Option<u32> {
        let prev = self.grid.hovered();
        let current = self.grid.hover(Vector2d::new(x, y));
        self.redraw(prev);
        if current != prev {
            self.redraw(current);
        }
        current.map(CellSlotId::get)
    }

    pub fn mouse_leave(&mut self) {
        let prev = self.grid.hovered();
        self.grid.pointer_leave();
        self.redraw(prev);
    }

    pub fn left_click(&mut self, x: f64, y: f64) -> Option<u32> {
        self.grid.left_click(Vector2d::new(x, y)).map(CellSlotId::get)
    }

    pub fn right_click(&mut self, x: f64, y: f64) -> Option<u32> {
        self.grid
            .right_click(Vector2d::new(x, y))
            .map(CellSlotId::get)
    }

    /// Current layout as a JS object.
    pub fn layout(&mut self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.grid.layout())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

impl CellGridView {
    fn redraw(&mut self, slot: Option<CellSlotId>) {
        if let Some(slot) = slot {
            let _ = self.grid.render_cell(slot);
        }
    }
}
