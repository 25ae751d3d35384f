use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::geometry::{FrameGeometry, Projected, ProjectedFace, ProjectedPip, CORNER_RADIUS, DIE_SIZE};
use super::material::{
    shade_face, FaceShade, BACKGROUND, CONTACT_SHADOW, PIP_COLOR, PIP_EMISSIVE_INTENSITY, SMOKED_GLASS,
};
use crate::error::DomError;

pub struct Renderer {
    lights: Vec<([f64; 3], f64)>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            lights: super::material::environment_lights(),
        }
    }

    /// Paints one frame in CSS pixels. The context transform already
    /// accounts for the device pixel ratio.
    pub fn draw(
        &self,
        ctx: &CanvasRenderingContext2d,
        frame: &FrameGeometry,
        width: f64,
        height: f64,
    ) -> Result<(), DomError> {
        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, width, height);

        if let Some(center) = frame.shadow_center {
            self.draw_shadow(ctx, center, frame.shadow_squash, frame.lift)?;
        }

        let shades: Vec<(&ProjectedFace, FaceShade)> = frame
            .faces
            .iter()
            .map(|face| (face, shade_face(&SMOKED_GLASS, face.normal, face.view_dir, &self.lights)))
            .collect();

        // Far side of the shell, seen through the near side.
        for (face, shade) in shades.iter().filter(|(face, _)| !face.facing) {
            ctx.set_global_alpha(0.5);
            fill_face(ctx, face, &shade.fill.css())?;
        }
        ctx.set_global_alpha(1.0);

        for pip in frame.pips.iter().filter(|pip| !pip.facing) {
            draw_pip(ctx, pip, 0.35)?;
        }

        for (face, shade) in shades.iter().filter(|(face, _)| face.facing) {
            fill_face(ctx, face, &shade.fill.css())?;
        }

        // Emissive pips shine through the glass in front of them.
        ctx.set_global_composite_operation("screen")?;
        for pip in frame.pips.iter().filter(|pip| pip.facing) {
            draw_pip(ctx, pip, 1.0)?;
        }
        ctx.set_global_composite_operation("source-over")?;

        for (face, shade) in shades.iter().filter(|(face, _)| face.facing) {
            stroke_edges(ctx, face, shade)?;
        }
        Ok(())
    }

    fn draw_shadow(
        &self,
        ctx: &CanvasRenderingContext2d,
        center: Projected,
        squash: f64,
        lift: f64,
    ) -> Result<(), DomError> {
        let gap = (lift - DIE_SIZE / 2.0) - CONTACT_SHADOW.y;
        let opacity = CONTACT_SHADOW.opacity_at(gap);
        if opacity <= 0.0 {
            return Ok(());
        }
        let radius = (DIE_SIZE / 2.0 + CONTACT_SHADOW.blur * 0.3) * center.scale;

        ctx.save();
        ctx.translate(center.x, center.y)?;
        ctx.scale(1.0, squash)?;
        let gradient = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, radius)?;
        gradient.add_color_stop(0.0, &format!("rgba(0, 0, 0, {:.3})", opacity))?;
        gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)")?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.begin_path();
        ctx.arc(0.0, 0.0, radius, 0.0, TAU)?;
        ctx.fill();
        ctx.restore();
        Ok(())
    }
}

fn trace_rounded(ctx: &CanvasRenderingContext2d, corners: &[Projected; 4], offset: f64) -> Result<(), DomError> {
    let last = corners[3];
    let first = corners[0];
    ctx.begin_path();
    ctx.move_to((last.x + first.x) / 2.0 + offset, (last.y + first.y) / 2.0);
    for i in 0..4 {
        let corner = corners[i];
        let next = corners[(i + 1) % 4];
        let radius = (CORNER_RADIUS * corner.scale).max(0.0);
        ctx.arc_to(corner.x + offset, corner.y, next.x + offset, next.y, radius)?;
    }
    ctx.close_path();
    Ok(())
}

fn fill_face(ctx: &CanvasRenderingContext2d, face: &ProjectedFace, color: &str) -> Result<(), DomError> {
    trace_rounded(ctx, &face.corners, 0.0)?;
    ctx.set_fill_style_str(color);
    ctx.fill();
    Ok(())
}

fn stroke_edges(ctx: &CanvasRenderingContext2d, face: &ProjectedFace, shade: &FaceShade) -> Result<(), DomError> {
    let width = (CORNER_RADIUS * face.corners[0].scale * 0.08).max(1.0);
    ctx.set_line_join("round");
    ctx.set_line_width(width);

    if shade.fringe > 0.05 {
        let alpha = shade.edge.a * 0.5;
        trace_rounded(ctx, &face.corners, shade.fringe)?;
        ctx.set_stroke_style_str(&format!("rgba(255, 80, 80, {:.3})", alpha));
        ctx.stroke();
        trace_rounded(ctx, &face.corners, -shade.fringe)?;
        ctx.set_stroke_style_str(&format!("rgba(80, 120, 255, {:.3})", alpha));
        ctx.stroke();
    }

    trace_rounded(ctx, &face.corners, 0.0)?;
    ctx.set_stroke_style_str(&shade.edge.css());
    ctx.stroke();
    Ok(())
}

fn draw_pip(ctx: &CanvasRenderingContext2d, pip: &ProjectedPip, visibility: f64) -> Result<(), DomError> {
    let Projected { x, y, .. } = pip.center;
    let glow = pip.radius * (1.0 + PIP_EMISSIVE_INTENSITY);

    let halo = ctx.create_radial_gradient(x, y, pip.radius * 0.5, x, y, glow)?;
    halo.add_color_stop(0.0, &PIP_COLOR.with_alpha(0.6 * visibility).css())?;
    halo.add_color_stop(1.0, &PIP_COLOR.with_alpha(0.0).css())?;
    ctx.set_fill_style_canvas_gradient(&halo);
    ctx.begin_path();
    ctx.arc(x, y, glow, 0.0, TAU)?;
    ctx.fill();

    ctx.set_fill_style_str(&PIP_COLOR.with_alpha(visibility).css());
    ctx.begin_path();
    ctx.arc(x, y, pip.radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}
