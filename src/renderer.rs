use crate::canvas::Canvas;
use crate::caster::cast_fan;
use crate::color::Rgba;
use crate::config::{
    PARTICLE_DIAMETER, PULSE_AMPLITUDE, PULSE_RING_COUNT, PULSE_SPEED, RAY_TICK_LENGTH,
    SPHERE_DIAMETER,
};
use crate::geometry::Point2D;
use crate::particle::Particle;
use crate::scene::Scene;

const WALL_COLOR: Rgba = Rgba::WHITE;
const PARTICLE_RAY_COLOR: Rgba = Rgba::rgba(255, 255, 255, 100);
const BACKGROUND_RAY_COLOR: Rgba = Rgba::rgba(0, 0, 255, 150);
const SPHERE_COLOR: Rgba = Rgba::rgba(0, 0, 255, 100);
const PULSE_WEIGHT: f64 = 2.0;

/// Frame number passed to the first `render_frame` call
pub const FIRST_FRAME: u64 = 1;

/// Rays that landed on a wall this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particle_hits: usize,
    pub background_hits: usize,
}

/// Linear remap of `value` from [in_lo, in_hi] to [out_lo, out_hi]
#[inline]
pub fn map_range(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    (value - in_lo) / (in_hi - in_lo) * (out_hi - out_lo) + out_lo
}

#[inline]
pub fn pulse_offset(frame: u64) -> f64 {
    map_range(
        (frame as f64 * PULSE_SPEED).sin(),
        -1.0,
        1.0,
        -PULSE_AMPLITUDE,
        PULSE_AMPLITUDE,
    )
}

/// Extent of pulse ring `i`, used as the ellipse diameter
#[inline]
pub fn pulse_ring_extent(i: usize, pulse: f64) -> f64 {
    let base = 100.0 + i as f64 * 50.0;
    base + pulse * (i + 1) as f64
}

#[inline]
fn pulse_ring_color(i: usize) -> Rgba {
    Rgba::rgba(255, 100, 200, (150 - 30 * i as i32).clamp(0, 255) as u8)
}

/// Draw one frame. The particle position must already reflect the pointer.
pub fn render_frame(
    canvas: &mut Canvas,
    scene: &Scene,
    particle: &Particle,
    frame: u64,
) -> FrameStats {
    canvas.clear(0, 0, 0);

    canvas.fill_circle(scene.center, SPHERE_DIAMETER, SPHERE_COLOR);

    for wall in &scene.walls {
        canvas.line(wall.a, wall.b, WALL_COLOR);
    }

    let pulse = pulse_offset(frame);
    for i in 0..PULSE_RING_COUNT {
        canvas.stroke_circle(
            scene.center,
            pulse_ring_extent(i, pulse),
            pulse_ring_color(i),
            PULSE_WEIGHT,
        );
    }

    draw_particle(canvas, particle);

    let particle_hits = draw_fan(
        canvas,
        particle.pos,
        &particle.look(&scene.walls),
        PARTICLE_RAY_COLOR,
    );

    let background = cast_fan(scene.center, &scene.background_rays, &scene.walls);
    let background_hits = draw_fan(canvas, scene.center, &background, BACKGROUND_RAY_COLOR);

    FrameStats {
        particle_hits,
        background_hits,
    }
}

// Dot plus a short tick along each ray direction
fn draw_particle(canvas: &mut Canvas, particle: &Particle) {
    canvas.fill_circle(particle.pos, PARTICLE_DIAMETER, Rgba::WHITE);
    for &dir in &particle.rays {
        canvas.line(particle.pos, particle.pos + dir * RAY_TICK_LENGTH, Rgba::WHITE);
    }
}

fn draw_fan(canvas: &mut Canvas, origin: Point2D, hits: &[Option<Point2D>], color: Rgba) -> usize {
    let mut n = 0;
    for pt in hits.iter().flatten() {
        canvas.line(origin, *pt, color);
        n += 1;
    }
    n
}
