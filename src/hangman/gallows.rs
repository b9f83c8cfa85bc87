//! Gallows drawing: the base plus one body part per wrong guess.
use std::f64::consts::TAU;

use crate::core::surface::{Point, Surface};

/// Surface size the coordinates below are laid out for
pub const SURFACE_WIDTH: f64 = 300.0;
pub const SURFACE_HEIGHT: f64 = 430.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

/// Drawing order, indexed by wrong-guess count minus one
pub const STEPS: [BodyPart; 6] = [
    BodyPart::Head,
    BodyPart::Body,
    BodyPart::LeftArm,
    BodyPart::RightArm,
    BodyPart::LeftLeg,
    BodyPart::RightLeg,
];

impl BodyPart {
    /// The part revealed when the wrong-guess counter reaches `count`
    pub fn for_wrong_count(count: u8) -> Option<Self> {
        let index = usize::from(count).checked_sub(1)?;
        STEPS.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            BodyPart::Head => "head",
            BodyPart::Body => "body",
            BodyPart::LeftArm => "left arm",
            BodyPart::RightArm => "right arm",
            BodyPart::LeftLeg => "left leg",
            BodyPart::RightLeg => "right leg",
        }
    }
}

pub fn draw_base<S: Surface + ?Sized>(surface: &mut S) {
    surface.fill_rect(95.0, 10.0, 150.0, 10.0); // top
    surface.fill_rect(245.0, 10.0, 10.0, 50.0); // noose
    surface.fill_rect(95.0, 10.0, 10.0, 400.0); // main beam
    surface.fill_rect(10.0, 410.0, 175.0, 10.0); // base
}

pub fn draw_part<S: Surface + ?Sized>(part: BodyPart, surface: &mut S) {
    match part {
        BodyPart::Head => surface.stroke_arc(250.0, 70.0, 20.0, 0.0, TAU),
        BodyPart::Body => surface.fill_rect(245.0, 90.0, 10.0, 80.0),
        BodyPart::LeftArm => limb(surface, (245.0, 100.0), (220.0, 140.0)),
        BodyPart::RightArm => limb(surface, (255.0, 100.0), (280.0, 140.0)),
        BodyPart::LeftLeg => limb(surface, (245.0, 170.0), (220.0, 220.0)),
        BodyPart::RightLeg => limb(surface, (255.0, 170.0), (280.0, 220.0)),
    }
}

fn limb<S: Surface + ?Sized>(surface: &mut S, from: (f64, f64), to: (f64, f64)) {
    surface.stroke_path(&[Point::new(from.0, from.1), Point::new(to.0, to.1)]);
}

/// Emit the step for a freshly reached wrong-guess count; counts outside 1..=6 draw nothing.
pub fn draw_step<S: Surface + ?Sized>(count: u8, surface: &mut S) -> Option<BodyPart> {
    let part = BodyPart::for_wrong_count(count)?;
    draw_part(part, surface);
    Some(part)
}

/// Rebuild the whole picture for `wrong_guesses` from a blank surface
pub fn redraw<S: Surface + ?Sized>(wrong_guesses: u8, surface: &mut S) {
    surface.clear();
    draw_base(surface);
    for part in STEPS.iter().take(usize::from(wrong_guesses)) {
        draw_part(*part, surface);
    }
}
