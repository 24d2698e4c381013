use std::fmt;

use crate::{
    foundation::color::Rgba8,
    scene::model::{Axis, AxisOrient, LineNode, Mark, Node, PathNode, Scene, TextAnchor, TextNode},
};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const AXIS_FONT_SIZE: f64 = 10.0;
const FONT_FAMILY: &str = "sans-serif";

/// Borrowing [`fmt::Display`] adapter that writes a scene as a standalone SVG document.
pub struct SvgDocument<'a>(&'a Scene);

impl Scene {
    /// SVG writer for this scene.
    pub fn svg(&self) -> SvgDocument<'_> {
        SvgDocument(self)
    }

    /// Serialize this scene as an SVG document.
    pub fn to_svg(&self) -> String {
        self.svg().to_string()
    }
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scene = self.0;
        let (w, h) = (scene.canvas.width, scene.canvas.height);
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )?;
        writeln!(
            f,
            r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"{}/>"#,
            scene.background.to_hex(),
            alpha_attr("fill-opacity", scene.background)
        )?;
        for node in &scene.nodes {
            match node {
                Node::Axis(a) => write_axis(f, a)?,
                Node::Mark(m) => write_mark(f, m)?,
                Node::Path(p) => write_path(f, p)?,
                Node::Line(l) => write_line(f, l)?,
                Node::Text(t) => write_text(f, t)?,
            }
        }
        writeln!(f, "</svg>")
    }
}

fn alpha_attr(name: &str, c: Rgba8) -> String {
    if c.a == 255 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, num(c.opacity()))
    }
}

/// Compact number formatting: integers without decimals, otherwise up to three decimals.
fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let r = (v * 1000.0).round() / 1000.0;
    if r == r.trunc() {
        format!("{}", r as i64)
    } else {
        let s = format!("{r:.3}");
        s.trim_end_matches('0').to_owned()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn write_mark(f: &mut fmt::Formatter<'_>, m: &Mark) -> fmt::Result {
    writeln!(
        f,
        r#"<circle class="bubble" cx="{}" cy="{}" r="{}" fill="{}" opacity="{}"/>"#,
        num(m.center.x),
        num(m.center.y),
        num(m.radius.abs()),
        m.fill.to_hex(),
        num(m.opacity.clamp(0.0, 1.0) * m.fill.opacity())
    )
}

fn write_path(f: &mut fmt::Formatter<'_>, p: &PathNode) -> fmt::Result {
    let dash = p
        .dash
        .map(|d| {
            format!(
                r#" stroke-dasharray="{} {}" stroke-dashoffset="{}""#,
                num(d.length),
                num(d.length),
                num(d.offset)
            )
        })
        .unwrap_or_default();
    writeln!(
        f,
        r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"{}{}/>"#,
        p.path.to_svg(),
        p.stroke.to_hex(),
        num(p.width),
        alpha_attr("stroke-opacity", p.stroke),
        dash
    )
}

fn write_line(f: &mut fmt::Formatter<'_>, l: &LineNode) -> fmt::Result {
    writeln!(
        f,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" opacity="{}"/>"#,
        num(l.from.x),
        num(l.from.y),
        num(l.to.x),
        num(l.to.y),
        l.stroke.to_hex(),
        num(l.opacity.clamp(0.0, 1.0))
    )
}

fn anchor_attr(a: TextAnchor) -> &'static str {
    match a {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn write_text(f: &mut fmt::Formatter<'_>, t: &TextNode) -> fmt::Result {
    writeln!(
        f,
        r#"<text x="{}" y="{}" font-family="{FONT_FAMILY}" font-size="{}" text-anchor="{}" fill="{}" opacity="{}">{}</text>"#,
        num(t.pos.x),
        num(t.pos.y),
        num(t.size),
        anchor_attr(t.anchor),
        t.fill.to_hex(),
        num(t.opacity.clamp(0.0, 1.0)),
        escape(&t.text)
    )
}

fn write_axis(f: &mut fmt::Formatter<'_>, a: &Axis) -> fmt::Result {
    let [s0, s1] = a.span;
    match a.orient {
        AxisOrient::Bottom => {
            writeln!(
                f,
                r#"<g class="axis" transform="translate(0,{})" font-family="{FONT_FAMILY}" font-size="{}" text-anchor="middle">"#,
                num(a.offset),
                num(AXIS_FONT_SIZE)
            )?;
            writeln!(
                f,
                r#"<path class="domain" d="M{},{}V0H{}V{}" fill="none" stroke="{}"/>"#,
                num(s0),
                num(TICK_SIZE),
                num(s1),
                num(TICK_SIZE),
                Rgba8::BLACK.to_hex()
            )?;
            for t in &a.ticks {
                writeln!(
                    f,
                    r#"<g class="tick" transform="translate({},0)"><line y2="{}" stroke="{}"/><text y="{}" dy="0.71em" fill="{}">{}</text></g>"#,
                    num(t.pos),
                    num(TICK_SIZE),
                    Rgba8::BLACK.to_hex(),
                    num(TICK_SIZE + TICK_PADDING),
                    Rgba8::BLACK.to_hex(),
                    escape(&t.label)
                )?;
            }
        }
        AxisOrient::Left => {
            writeln!(
                f,
                r#"<g class="axis" transform="translate({},0)" font-family="{FONT_FAMILY}" font-size="{}" text-anchor="end">"#,
                num(a.offset),
                num(AXIS_FONT_SIZE)
            )?;
            writeln!(
                f,
                r#"<path class="domain" d="M-{},{}H0V{}H-{}" fill="none" stroke="{}"/>"#,
                num(TICK_SIZE),
                num(s0),
                num(s1),
                num(TICK_SIZE),
                Rgba8::BLACK.to_hex()
            )?;
            for t in &a.ticks {
                writeln!(
                    f,
                    r#"<g class="tick" transform="translate(0,{})"><line x2="-{}" stroke="{}"/><text x="-{}" dy="0.32em" fill="{}">{}</text></g>"#,
                    num(t.pos),
                    num(TICK_SIZE),
                    Rgba8::BLACK.to_hex(),
                    num(TICK_SIZE + TICK_PADDING),
                    Rgba8::BLACK.to_hex(),
                    escape(&t.label)
                )?;
            }
        }
    }
    writeln!(f, "</g>")
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
