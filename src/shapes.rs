//! Shape model: kind registry, closed dispatch enum, and typed payloads.
//!
//! Every drawable element is described by a raw record (see
//! [`ShapeParams`]) whose `type` tag selects one of the kinds below. The
//! record is resolved exactly once, at add time: [`create`] maps the tag to
//! a [`ShapeKind`], constructs the kind's typed payload (validating every
//! parameter and applying defaults), and returns an immutable [`Shape`].
//! Drawing never re-validates.
//!
//! Kinds that differ only by a fixed parameter share a payload struct: the
//! pentagon, hexagon, and octagon reuse the regular-polygon payload, and the
//! single- and double-arrowhead lines share one payload.

use std::str::FromStr;

use crate::error::{ShapeError, ValidationError};
use crate::params::ShapeParams;
use crate::surface::Surface;

pub mod arrows;
pub mod basic;
pub mod callouts;
pub mod connectors;
pub mod curves;
pub mod decorative;
pub mod lines;
pub mod polygons;
pub mod symbols;

use connectors::ArrowHeads;

/// Every supported shape kind, identified by its record tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    StraightLine,
    DashedLine,
    ZigzagLine,
    WavyLine,
    LineWithArrowhead,
    LineWithDoubleArrowhead,
    ElbowConnector,
    ElbowConnectorWithArrowhead,
    ElbowConnectorWithDoubleArrowhead,
    Rectangle,
    Square,
    Circle,
    Ellipse,
    PolygonWithCoordinates,
    RegularPolygon,
    Triangle,
    Pentagon,
    Hexagon,
    Octagon,
    Rhombus,
    Parallelogram,
    Trapezoid,
    Diamond,
    Heart,
    Cloud,
    Star,
    SpeechBubbleRectangle,
    BannerRibbon,
    Flower,
    Butterfly,
    Tree,
    Sun,
    Moon,
    LightningBolt,
    BlockArrow,
    CurvedArrow,
    CircularArrow,
    CalloutBubble,
    ThoughtBubble,
    OvalCallout,
    Cross,
    PlusSign,
    MinusSign,
    MultiplicationSign,
    Spiral,
    Helix,
    SineWavePattern,
    FractalTree,
}

impl ShapeKind {
    /// All registered kinds, in a stable order. Single source of truth for
    /// the supported-type list reported by canvas introspection.
    pub const ALL: [ShapeKind; 48] = [
        ShapeKind::StraightLine,
        ShapeKind::DashedLine,
        ShapeKind::ZigzagLine,
        ShapeKind::WavyLine,
        ShapeKind::LineWithArrowhead,
        ShapeKind::LineWithDoubleArrowhead,
        ShapeKind::ElbowConnector,
        ShapeKind::ElbowConnectorWithArrowhead,
        ShapeKind::ElbowConnectorWithDoubleArrowhead,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::PolygonWithCoordinates,
        ShapeKind::RegularPolygon,
        ShapeKind::Triangle,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
        ShapeKind::Octagon,
        ShapeKind::Rhombus,
        ShapeKind::Parallelogram,
        ShapeKind::Trapezoid,
        ShapeKind::Diamond,
        ShapeKind::Heart,
        ShapeKind::Cloud,
        ShapeKind::Star,
        ShapeKind::SpeechBubbleRectangle,
        ShapeKind::BannerRibbon,
        ShapeKind::Flower,
        ShapeKind::Butterfly,
        ShapeKind::Tree,
        ShapeKind::Sun,
        ShapeKind::Moon,
        ShapeKind::LightningBolt,
        ShapeKind::BlockArrow,
        ShapeKind::CurvedArrow,
        ShapeKind::CircularArrow,
        ShapeKind::CalloutBubble,
        ShapeKind::ThoughtBubble,
        ShapeKind::OvalCallout,
        ShapeKind::Cross,
        ShapeKind::PlusSign,
        ShapeKind::MinusSign,
        ShapeKind::MultiplicationSign,
        ShapeKind::Spiral,
        ShapeKind::Helix,
        ShapeKind::SineWavePattern,
        ShapeKind::FractalTree,
    ];

    /// The record tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::StraightLine => "straight_line",
            ShapeKind::DashedLine => "dashed_line",
            ShapeKind::ZigzagLine => "zigzag_line",
            ShapeKind::WavyLine => "wavy_line",
            ShapeKind::LineWithArrowhead => "line_with_arrowhead",
            ShapeKind::LineWithDoubleArrowhead => "line_with_double_arrowhead",
            ShapeKind::ElbowConnector => "elbow_connector",
            ShapeKind::ElbowConnectorWithArrowhead => "elbow_connector_with_arrowhead",
            ShapeKind::ElbowConnectorWithDoubleArrowhead => {
                "elbow_connector_with_double_arrowhead"
            }
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::PolygonWithCoordinates => "polygon_with_coordinates",
            ShapeKind::RegularPolygon => "regular_polygon",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Octagon => "octagon",
            ShapeKind::Rhombus => "rhombus",
            ShapeKind::Parallelogram => "parallelogram",
            ShapeKind::Trapezoid => "trapezoid",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Heart => "heart",
            ShapeKind::Cloud => "cloud",
            ShapeKind::Star => "star",
            ShapeKind::SpeechBubbleRectangle => "speech_bubble_rectangle",
            ShapeKind::BannerRibbon => "banner_ribbon",
            ShapeKind::Flower => "flower",
            ShapeKind::Butterfly => "butterfly",
            ShapeKind::Tree => "tree",
            ShapeKind::Sun => "sun",
            ShapeKind::Moon => "moon",
            ShapeKind::LightningBolt => "lightning_bolt",
            ShapeKind::BlockArrow => "block_arrow",
            ShapeKind::CurvedArrow => "curved_arrow",
            ShapeKind::CircularArrow => "circular_arrow",
            ShapeKind::CalloutBubble => "callout_bubble",
            ShapeKind::ThoughtBubble => "thought_bubble",
            ShapeKind::OvalCallout => "oval_callout",
            ShapeKind::Cross => "cross",
            ShapeKind::PlusSign => "plus_sign",
            ShapeKind::MinusSign => "minus_sign",
            ShapeKind::MultiplicationSign => "multiplication_sign",
            ShapeKind::Spiral => "spiral",
            ShapeKind::Helix => "helix",
            ShapeKind::SineWavePattern => "sine_wave_pattern",
            ShapeKind::FractalTree => "fractal_tree",
        }
    }

    /// Tags of all registered kinds.
    pub fn supported_tags() -> Vec<&'static str> {
        Self::ALL.iter().map(ShapeKind::as_str).collect()
    }
}

impl FromStr for ShapeKind {
    type Err = ();

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == tag)
            .ok_or(())
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, immutable shape instance: one case per kind, each carrying
/// the typed payload built from its record.
#[derive(Debug, Clone)]
pub enum Shape {
    StraightLine(lines::StraightLine),
    DashedLine(lines::DashedLine),
    ZigzagLine(lines::ZigzagLine),
    WavyLine(lines::WavyLine),
    LineWithArrowhead(lines::ArrowLine),
    LineWithDoubleArrowhead(lines::ArrowLine),
    ElbowConnector(connectors::ElbowConnector),
    ElbowConnectorWithArrowhead(connectors::ElbowConnector),
    ElbowConnectorWithDoubleArrowhead(connectors::ElbowConnector),
    Rectangle(basic::Rectangle),
    Square(basic::Square),
    Circle(basic::Circle),
    Ellipse(basic::Ellipse),
    PolygonWithCoordinates(polygons::CoordinatePolygon),
    RegularPolygon(polygons::RegularPolygon),
    Triangle(polygons::Triangle),
    Pentagon(polygons::RegularPolygon),
    Hexagon(polygons::RegularPolygon),
    Octagon(polygons::RegularPolygon),
    Rhombus(polygons::Rhombus),
    Parallelogram(polygons::Parallelogram),
    Trapezoid(polygons::Trapezoid),
    Diamond(polygons::Diamond),
    Heart(decorative::Heart),
    Cloud(decorative::Cloud),
    Star(decorative::Star),
    SpeechBubbleRectangle(decorative::SpeechBubble),
    BannerRibbon(decorative::BannerRibbon),
    Flower(decorative::Flower),
    Butterfly(decorative::Butterfly),
    Tree(decorative::Tree),
    Sun(decorative::Sun),
    Moon(decorative::Moon),
    LightningBolt(decorative::LightningBolt),
    BlockArrow(arrows::BlockArrow),
    CurvedArrow(arrows::CurvedArrow),
    CircularArrow(arrows::CircularArrow),
    CalloutBubble(callouts::CalloutBubble),
    ThoughtBubble(callouts::ThoughtBubble),
    OvalCallout(callouts::OvalCallout),
    Cross(symbols::Cross),
    PlusSign(symbols::Sign),
    MinusSign(symbols::Sign),
    MultiplicationSign(symbols::Sign),
    Spiral(curves::Spiral),
    Helix(curves::Helix),
    SineWavePattern(curves::SineWave),
    FractalTree(curves::FractalTree),
}

/// Resolves a raw record into a validated shape instance.
///
/// Fails with [`ShapeError::MissingType`] / [`ShapeError::UnknownType`] at
/// registry resolution, or propagates the payload's [`ValidationError`].
/// A failed record never produces a partially constructed shape.
pub fn create(params: &ShapeParams) -> Result<Shape, ShapeError> {
    let tag = params.type_tag()?;
    let kind = tag.parse::<ShapeKind>().map_err(|_| ShapeError::UnknownType {
        tag: tag.to_string(),
    })?;
    Shape::from_kind(kind, params).map_err(ShapeError::from)
}

impl Shape {
    /// Constructs and validates the payload for a resolved kind.
    pub fn from_kind(kind: ShapeKind, params: &ShapeParams) -> Result<Shape, ValidationError> {
        let shape = match kind {
            ShapeKind::StraightLine => {
                Shape::StraightLine(lines::StraightLine::from_params(params)?)
            }
            ShapeKind::DashedLine => Shape::DashedLine(lines::DashedLine::from_params(params)?),
            ShapeKind::ZigzagLine => Shape::ZigzagLine(lines::ZigzagLine::from_params(params)?),
            ShapeKind::WavyLine => Shape::WavyLine(lines::WavyLine::from_params(params)?),
            ShapeKind::LineWithArrowhead => {
                Shape::LineWithArrowhead(lines::ArrowLine::from_params(params, false)?)
            }
            ShapeKind::LineWithDoubleArrowhead => {
                Shape::LineWithDoubleArrowhead(lines::ArrowLine::from_params(params, true)?)
            }
            ShapeKind::ElbowConnector => Shape::ElbowConnector(
                connectors::ElbowConnector::from_params(params, ArrowHeads::None)?,
            ),
            ShapeKind::ElbowConnectorWithArrowhead => Shape::ElbowConnectorWithArrowhead(
                connectors::ElbowConnector::from_params(params, ArrowHeads::End)?,
            ),
            ShapeKind::ElbowConnectorWithDoubleArrowhead => {
                Shape::ElbowConnectorWithDoubleArrowhead(connectors::ElbowConnector::from_params(
                    params,
                    ArrowHeads::Both,
                )?)
            }
            ShapeKind::Rectangle => Shape::Rectangle(basic::Rectangle::from_params(params)?),
            ShapeKind::Square => Shape::Square(basic::Square::from_params(params)?),
            ShapeKind::Circle => Shape::Circle(basic::Circle::from_params(params)?),
            ShapeKind::Ellipse => Shape::Ellipse(basic::Ellipse::from_params(params)?),
            ShapeKind::PolygonWithCoordinates => {
                Shape::PolygonWithCoordinates(polygons::CoordinatePolygon::from_params(params)?)
            }
            ShapeKind::RegularPolygon => {
                Shape::RegularPolygon(polygons::RegularPolygon::from_params(params)?)
            }
            ShapeKind::Triangle => Shape::Triangle(polygons::Triangle::from_params(params)?),
            ShapeKind::Pentagon => {
                Shape::Pentagon(polygons::RegularPolygon::with_sides(params, 5)?)
            }
            ShapeKind::Hexagon => Shape::Hexagon(polygons::RegularPolygon::with_sides(params, 6)?),
            ShapeKind::Octagon => Shape::Octagon(polygons::RegularPolygon::with_sides(params, 8)?),
            ShapeKind::Rhombus => Shape::Rhombus(polygons::Rhombus::from_params(params)?),
            ShapeKind::Parallelogram => {
                Shape::Parallelogram(polygons::Parallelogram::from_params(params)?)
            }
            ShapeKind::Trapezoid => Shape::Trapezoid(polygons::Trapezoid::from_params(params)?),
            ShapeKind::Diamond => Shape::Diamond(polygons::Diamond::from_params(params)?),
            ShapeKind::Heart => Shape::Heart(decorative::Heart::from_params(params)?),
            ShapeKind::Cloud => Shape::Cloud(decorative::Cloud::from_params(params)?),
            ShapeKind::Star => Shape::Star(decorative::Star::from_params(params)?),
            ShapeKind::SpeechBubbleRectangle => {
                Shape::SpeechBubbleRectangle(decorative::SpeechBubble::from_params(params)?)
            }
            ShapeKind::BannerRibbon => {
                Shape::BannerRibbon(decorative::BannerRibbon::from_params(params)?)
            }
            ShapeKind::Flower => Shape::Flower(decorative::Flower::from_params(params)?),
            ShapeKind::Butterfly => Shape::Butterfly(decorative::Butterfly::from_params(params)?),
            ShapeKind::Tree => Shape::Tree(decorative::Tree::from_params(params)?),
            ShapeKind::Sun => Shape::Sun(decorative::Sun::from_params(params)?),
            ShapeKind::Moon => Shape::Moon(decorative::Moon::from_params(params)?),
            ShapeKind::LightningBolt => {
                Shape::LightningBolt(decorative::LightningBolt::from_params(params)?)
            }
            ShapeKind::BlockArrow => Shape::BlockArrow(arrows::BlockArrow::from_params(params)?),
            ShapeKind::CurvedArrow => {
                Shape::CurvedArrow(arrows::CurvedArrow::from_params(params)?)
            }
            ShapeKind::CircularArrow => {
                Shape::CircularArrow(arrows::CircularArrow::from_params(params)?)
            }
            ShapeKind::CalloutBubble => {
                Shape::CalloutBubble(callouts::CalloutBubble::from_params(params)?)
            }
            ShapeKind::ThoughtBubble => {
                Shape::ThoughtBubble(callouts::ThoughtBubble::from_params(params)?)
            }
            ShapeKind::OvalCallout => {
                Shape::OvalCallout(callouts::OvalCallout::from_params(params)?)
            }
            ShapeKind::Cross => Shape::Cross(symbols::Cross::from_params(params)?),
            ShapeKind::PlusSign => Shape::PlusSign(symbols::Sign::from_params(params)?),
            ShapeKind::MinusSign => Shape::MinusSign(symbols::Sign::from_params(params)?),
            ShapeKind::MultiplicationSign => {
                Shape::MultiplicationSign(symbols::Sign::from_params(params)?)
            }
            ShapeKind::Spiral => Shape::Spiral(curves::Spiral::from_params(params)?),
            ShapeKind::Helix => Shape::Helix(curves::Helix::from_params(params)?),
            ShapeKind::SineWavePattern => {
                Shape::SineWavePattern(curves::SineWave::from_params(params)?)
            }
            ShapeKind::FractalTree => {
                Shape::FractalTree(curves::FractalTree::from_params(params)?)
            }
        };
        Ok(shape)
    }

    /// The kind this instance was created as.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::StraightLine(_) => ShapeKind::StraightLine,
            Shape::DashedLine(_) => ShapeKind::DashedLine,
            Shape::ZigzagLine(_) => ShapeKind::ZigzagLine,
            Shape::WavyLine(_) => ShapeKind::WavyLine,
            Shape::LineWithArrowhead(_) => ShapeKind::LineWithArrowhead,
            Shape::LineWithDoubleArrowhead(_) => ShapeKind::LineWithDoubleArrowhead,
            Shape::ElbowConnector(_) => ShapeKind::ElbowConnector,
            Shape::ElbowConnectorWithArrowhead(_) => ShapeKind::ElbowConnectorWithArrowhead,
            Shape::ElbowConnectorWithDoubleArrowhead(_) => {
                ShapeKind::ElbowConnectorWithDoubleArrowhead
            }
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::PolygonWithCoordinates(_) => ShapeKind::PolygonWithCoordinates,
            Shape::RegularPolygon(_) => ShapeKind::RegularPolygon,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Pentagon(_) => ShapeKind::Pentagon,
            Shape::Hexagon(_) => ShapeKind::Hexagon,
            Shape::Octagon(_) => ShapeKind::Octagon,
            Shape::Rhombus(_) => ShapeKind::Rhombus,
            Shape::Parallelogram(_) => ShapeKind::Parallelogram,
            Shape::Trapezoid(_) => ShapeKind::Trapezoid,
            Shape::Diamond(_) => ShapeKind::Diamond,
            Shape::Heart(_) => ShapeKind::Heart,
            Shape::Cloud(_) => ShapeKind::Cloud,
            Shape::Star(_) => ShapeKind::Star,
            Shape::SpeechBubbleRectangle(_) => ShapeKind::SpeechBubbleRectangle,
            Shape::BannerRibbon(_) => ShapeKind::BannerRibbon,
            Shape::Flower(_) => ShapeKind::Flower,
            Shape::Butterfly(_) => ShapeKind::Butterfly,
            Shape::Tree(_) => ShapeKind::Tree,
            Shape::Sun(_) => ShapeKind::Sun,
            Shape::Moon(_) => ShapeKind::Moon,
            Shape::LightningBolt(_) => ShapeKind::LightningBolt,
            Shape::BlockArrow(_) => ShapeKind::BlockArrow,
            Shape::CurvedArrow(_) => ShapeKind::CurvedArrow,
            Shape::CircularArrow(_) => ShapeKind::CircularArrow,
            Shape::CalloutBubble(_) => ShapeKind::CalloutBubble,
            Shape::ThoughtBubble(_) => ShapeKind::ThoughtBubble,
            Shape::OvalCallout(_) => ShapeKind::OvalCallout,
            Shape::Cross(_) => ShapeKind::Cross,
            Shape::PlusSign(_) => ShapeKind::PlusSign,
            Shape::MinusSign(_) => ShapeKind::MinusSign,
            Shape::MultiplicationSign(_) => ShapeKind::MultiplicationSign,
            Shape::Spiral(_) => ShapeKind::Spiral,
            Shape::Helix(_) => ShapeKind::Helix,
            Shape::SineWavePattern(_) => ShapeKind::SineWavePattern,
            Shape::FractalTree(_) => ShapeKind::FractalTree,
        }
    }

    /// Draws the shape onto the surface. Pure with respect to the payload:
    /// no state survives between calls.
    pub fn draw(&self, surface: &mut Surface) {
        match self {
            Shape::StraightLine(s) => s.draw(surface),
            Shape::DashedLine(s) => s.draw(surface),
            Shape::ZigzagLine(s) => s.draw(surface),
            Shape::WavyLine(s) => s.draw(surface),
            Shape::LineWithArrowhead(s) | Shape::LineWithDoubleArrowhead(s) => s.draw(surface),
            Shape::ElbowConnector(s)
            | Shape::ElbowConnectorWithArrowhead(s)
            | Shape::ElbowConnectorWithDoubleArrowhead(s) => s.draw(surface),
            Shape::Rectangle(s) => s.draw(surface),
            Shape::Square(s) => s.draw(surface),
            Shape::Circle(s) => s.draw(surface),
            Shape::Ellipse(s) => s.draw(surface),
            Shape::PolygonWithCoordinates(s) => s.draw(surface),
            Shape::RegularPolygon(s)
            | Shape::Pentagon(s)
            | Shape::Hexagon(s)
            | Shape::Octagon(s) => s.draw(surface),
            Shape::Triangle(s) => s.draw(surface),
            Shape::Rhombus(s) => s.draw(surface),
            Shape::Parallelogram(s) => s.draw(surface),
            Shape::Trapezoid(s) => s.draw(surface),
            Shape::Diamond(s) => s.draw(surface),
            Shape::Heart(s) => s.draw(surface),
            Shape::Cloud(s) => s.draw(surface),
            Shape::Star(s) => s.draw(surface),
            Shape::SpeechBubbleRectangle(s) => s.draw(surface),
            Shape::BannerRibbon(s) => s.draw(surface),
            Shape::Flower(s) => s.draw(surface),
            Shape::Butterfly(s) => s.draw(surface),
            Shape::Tree(s) => s.draw(surface),
            Shape::Sun(s) => s.draw(surface),
            Shape::Moon(s) => s.draw(surface),
            Shape::LightningBolt(s) => s.draw(surface),
            Shape::BlockArrow(s) => s.draw(surface),
            Shape::CurvedArrow(s) => s.draw(surface),
            Shape::CircularArrow(s) => s.draw(surface),
            Shape::CalloutBubble(s) => s.draw(surface),
            Shape::ThoughtBubble(s) => s.draw(surface),
            Shape::OvalCallout(s) => s.draw(surface),
            Shape::Cross(s) => s.draw(surface),
            Shape::PlusSign(s) => s.draw_plus(surface),
            Shape::MinusSign(s) => s.draw_minus(surface),
            Shape::MultiplicationSign(s) => s.draw_times(surface),
            Shape::Spiral(s) => s.draw(surface),
            Shape::Helix(s) => s.draw(surface),
            Shape::SineWavePattern(s) => s.draw(surface),
            Shape::FractalTree(s) => s.draw(surface),
        }
    }
}
