//! Debug overlay.
//!
//! The renderer turns engine state into a flat list of draw commands; the
//! browser side paints them onto a 2D canvas. Keeping the geometry here
//! lets the overlay be checked without a canvas.

use crate::core::Vec2;
use crate::systems::body::Shape;
use crate::systems::engine::Engine;

pub const BACKGROUND: &str = "#14151f";
pub const STROKE_DYNAMIC: &str = "#bbb";
pub const STROKE_STATIC: &str = "#555";
pub const STROKE_SLEEPING: &str = "rgba(187,187,187,0.5)";
pub const STROKE_VELOCITY: &str = "cornflowerblue";
pub const STROKE_ANGLE: &str = "rgba(255,165,0,1)";

/// Velocity lines are drawn this many steps ahead
const VELOCITY_SCALE: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub show_velocity: bool,
    pub show_angle_indicator: bool,
    pub wireframes: bool,
}

impl RenderOptions {
    /// Overlay at the given size with velocity and angle indicators on
    pub fn overlay(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            show_velocity: true,
            show_angle_indicator: true,
            wireframes: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32, color: &'static str },
    Rect { center: Vec2, width: f32, height: f32, angle: f32, stroke: &'static str, filled: bool },
    Circle { center: Vec2, radius: f32, stroke: &'static str, filled: bool },
    Line { from: Vec2, to: Vec2, stroke: &'static str },
}

pub struct DebugRenderer {
    options: RenderOptions,
    running: bool,
    frames: u64,
    commands: Vec<DrawCommand>,
}

impl DebugRenderer {
    pub fn create(options: RenderOptions) -> Self {
        Self {
            options,
            running: false,
            frames: 0,
            commands: Vec::new(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Start drawing on every frame
    pub fn run(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.commands.clear();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Draw list from the last `render`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Frames drawn since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Build the draw list for the current engine state.
    /// A stopped renderer returns an empty list.
    pub fn render(&mut self, engine: &Engine) -> &[DrawCommand] {
        self.commands.clear();
        if !self.running {
            return &self.commands;
        }

        let opts = self.options;
        self.commands.push(DrawCommand::Clear {
            width: opts.width as f32,
            height: opts.height as f32,
            color: BACKGROUND,
        });

        let bodies = engine.world.bodies();
        for body in bodies {
            let stroke = if body.is_static {
                STROKE_STATIC
            } else if body.is_sleeping {
                STROKE_SLEEPING
            } else {
                STROKE_DYNAMIC
            };
            let filled = !opts.wireframes;
            self.commands.push(match body.shape {
                Shape::Rect { width, height } => DrawCommand::Rect {
                    center: body.position,
                    width,
                    height,
                    angle: body.angle,
                    stroke,
                    filled,
                },
                Shape::Circle { radius } => DrawCommand::Circle {
                    center: body.position,
                    radius,
                    stroke,
                    filled,
                },
            });
        }

        if opts.show_velocity {
            for body in bodies.iter().filter(|b| !b.is_frozen()) {
                self.commands.push(DrawCommand::Line {
                    from: body.position,
                    to: body.position + body.velocity * VELOCITY_SCALE,
                    stroke: STROKE_VELOCITY,
                });
            }
        }

        if opts.show_angle_indicator {
            for body in bodies {
                self.commands.push(DrawCommand::Line {
                    from: body.position,
                    to: body.heading_point(),
                    stroke: STROKE_ANGLE,
                });
            }
        }

        self.frames += 1;
        &self.commands
    }
}
