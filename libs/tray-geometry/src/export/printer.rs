//! OpenSCAD source printer.
//!
//! Transforms prefix their child on the same line; booleans open an
//! indented block. Background solids carry the `%` modifier.

use std::fmt::Write;

use glam::DVec3;

use crate::solid::{Solid, SolidNode};

const INDENT: &str = "    ";

/// Appends `solid` as one statement at `depth`.
pub(crate) fn write_solid(out: &mut String, solid: &Solid, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    write_inline(out, solid, depth);
}

fn write_inline(out: &mut String, solid: &Solid, depth: usize) {
    if solid.is_background() {
        out.push('%');
    }
    match solid.node() {
        SolidNode::Cube { size } => {
            let _ = writeln!(out, "cube({});", vector(*size));
        }
        SolidNode::Sphere { radius } => {
            let _ = writeln!(out, "sphere(r={});", number(*radius));
        }
        SolidNode::Cylinder {
            height,
            radius_bottom,
            radius_top,
        } => {
            if radius_bottom == radius_top {
                let _ = writeln!(
                    out,
                    "cylinder(h={}, r={});",
                    number(*height),
                    number(*radius_bottom)
                );
            } else {
                let _ = writeln!(
                    out,
                    "cylinder(h={}, r1={}, r2={});",
                    number(*height),
                    number(*radius_bottom),
                    number(*radius_top)
                );
            }
        }
        SolidNode::Text { text, style } => {
            let _ = writeln!(
                out,
                "text(\"{}\", size={}, font=\"{}\", halign=\"{}\", valign=\"{}\");",
                escape(text),
                number(style.size),
                escape(&style.font),
                style.halign.as_str(),
                style.valign.as_str()
            );
        }
        SolidNode::LinearExtrude { height, child } => {
            let _ = write!(out, "linear_extrude(height={}) ", number(*height));
            write_inline(out, child, depth);
        }
        SolidNode::Translate { offset, child } => {
            let _ = write!(out, "translate({}) ", vector(*offset));
            write_inline(out, child, depth);
        }
        SolidNode::Rotate { angles, child } => {
            let _ = write!(out, "rotate({}) ", vector(*angles));
            write_inline(out, child, depth);
        }
        SolidNode::Union { children } => write_block(out, "union", children, depth),
        SolidNode::Difference { children } => write_block(out, "difference", children, depth),
        SolidNode::Intersection { children } => {
            write_block(out, "intersection", children, depth)
        }
        SolidNode::Hull { children } => write_block(out, "hull", children, depth),
        SolidNode::Empty => out.push_str("union() {}\n"),
    }
}

fn write_block(out: &mut String, name: &str, children: &[Solid], depth: usize) {
    if children.is_empty() {
        let _ = writeln!(out, "{name}() {{}}");
        return;
    }
    let _ = writeln!(out, "{name}() {{");
    for child in children {
        write_solid(out, child, depth + 1);
    }
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str("}\n");
}

/// Shortest round-trip form, with negative zero printed as `0`.
pub(crate) fn number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn vector(v: DVec3) -> String {
    format!("[{}, {}, {}]", number(v.x), number(v.y), number(v.z))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
