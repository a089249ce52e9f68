// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for `starfold_demo`.

use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Anchor {
    Start,
    Middle,
    End,
}

/// An SVG document assembled element by element.
#[derive(Debug)]
pub(crate) struct SvgDocument {
    size: Size,
    body: String,
}

impl SvgDocument {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    pub(crate) fn begin_group(&mut self, offset: Vec2) {
        self.body.push_str(&format!(
            r#"<g transform="translate({} {})">"#,
            offset.x, offset.y
        ));
        self.body.push('\n');
    }

    pub(crate) fn end_group(&mut self) {
        self.body.push_str("</g>\n");
    }

    pub(crate) fn rect(&mut self, rect: Rect, fill: Color, stroke: Option<Color>) {
        self.body.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        ));
        write_paint_attr(&mut self.body, "fill", fill);
        if let Some(stroke) = stroke {
            write_paint_attr(&mut self.body, "stroke", stroke);
        }
        self.body.push_str("/>\n");
    }

    pub(crate) fn circle(&mut self, center: Point, radius: f64, fill: Color) {
        self.body.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{radius}""#,
            center.x, center.y
        ));
        write_paint_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    pub(crate) fn line(&mut self, a: Point, b: Point, stroke: Color, width: f64) {
        self.body.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke-width="{width}""#,
            a.x, a.y, b.x, b.y
        ));
        write_paint_attr(&mut self.body, "stroke", stroke);
        self.body.push_str("/>\n");
    }

    pub(crate) fn text(&mut self, pos: Point, text: &str, font_size: f64, anchor: Anchor) {
        let anchor = match anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };
        self.body.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="{font_size}" font-family="sans-serif" dominant-baseline="middle" text-anchor="{anchor}">"#,
            pos.x, pos.y
        ));
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }

    pub(crate) fn finish(self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.size.width,
            h = self.size.height,
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o:.3}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn translucent_paint_gets_an_opacity() {
        assert_eq!(svg_paint(css::RED), (String::from("#ff0000"), None));
        let (_, opacity) = svg_paint(css::RED.multiply_alpha(0.5));
        assert!(opacity.is_some_and(|o| (o - 0.5).abs() < 0.01));
    }

    #[test]
    fn text_is_escaped() {
        let mut doc = SvgDocument::new(Size::new(10.0, 10.0));
        doc.text(Point::ZERO, "a<b & \"c\"", 10.0, Anchor::Start);
        let svg = doc.finish();
        assert!(svg.contains("a&lt;b &amp; &quot;c&quot;"));
        assert!(svg.ends_with("</svg>\n"));
    }
}
