//! Paints debug draw commands onto a 2D canvas inside the container.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

use crate::core::StageError;
use crate::systems::debug_render::DrawCommand;

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    /// Create a `width` x `height` canvas, append it to `container` and grab
    /// its 2D context
    pub fn attach(
        document: &Document,
        container: &HtmlElement,
        width: u32,
        height: u32,
    ) -> Result<(Self, HtmlCanvasElement), StageError> {
        let canvas = document
            .create_element("canvas")
            .map_err(StageError::dom)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| StageError::CanvasUnavailable)?;
        canvas.set_width(width);
        canvas.set_height(height);
        container.append_child(&canvas).map_err(StageError::dom)?;

        let ctx = canvas
            .get_context("2d")
            .map_err(StageError::dom)?
            .ok_or(StageError::CanvasUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| StageError::CanvasUnavailable)?;

        Ok((Self { ctx }, canvas))
    }

    pub fn paint(&self, commands: &[DrawCommand]) -> Result<(), StageError> {
        let ctx = &self.ctx;
        ctx.set_line_width(1.0);
        for command in commands {
            match *command {
                DrawCommand::Clear { width, height, color } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
                }
                DrawCommand::Rect { center, width, height, angle, stroke, filled } => {
                    ctx.save();
                    ctx.translate(center.x as f64, center.y as f64).map_err(StageError::dom)?;
                    ctx.rotate(angle as f64).map_err(StageError::dom)?;
                    ctx.begin_path();
                    ctx.rect(
                        -(width as f64) / 2.0,
                        -(height as f64) / 2.0,
                        width as f64,
                        height as f64,
                    );
                    finish(ctx, stroke, filled);
                    ctx.restore();
                }
                DrawCommand::Circle { center, radius, stroke, filled } => {
                    ctx.begin_path();
                    ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    )
                    .map_err(StageError::dom)?;
                    finish(ctx, stroke, filled);
                }
                DrawCommand::Line { from, to, stroke } => {
                    ctx.begin_path();
                    ctx.move_to(from.x as f64, from.y as f64);
                    ctx.line_to(to.x as f64, to.y as f64);
                    ctx.set_stroke_style_str(stroke);
                    ctx.stroke();
                }
            }
        }
        Ok(())
    }
}

fn finish(ctx: &CanvasRenderingContext2d, color: &str, filled: bool) {
    if filled {
        ctx.set_fill_style_str(color);
        ctx.fill();
    } else {
        ctx.set_stroke_style_str(color);
        ctx.stroke();
    }
}
