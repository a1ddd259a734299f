//! SVG builder: a [`Surface`] that accumulates SVG elements and produces
//! the final string.

use super::surface::*;

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub struct SvgBuilder {
    elements: Vec<String>,
    container: Container,
    fit: Fit,
}

impl SvgBuilder {
    pub fn fit(&self) -> Fit {
        self.fit
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn build(self) -> String {
        let Container { width, height } = self.container;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet">"#,
            width, height, width, height
        );
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <g transform="translate({:.2},{:.2}) scale({:.4})">"#,
            self.fit.translate_x, self.fit.translate_y, self.fit.scale
        ));
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("    ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("  </g>\n</svg>\n");
        svg
    }

    fn push(&mut self, element: String) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }
}

fn stroke_attrs(stroke: Option<&Stroke<'_>>) -> String {
    match stroke {
        Some(s) => format!(r#" stroke="{}" stroke-width="{:.1}""#, escape(s.color), s.width),
        None => r#" stroke="none""#.to_string(),
    }
}

fn fill_attr(fill: Option<&str>) -> String {
    format!(r#" fill="{}""#, escape(fill.unwrap_or("none")))
}

impl Surface for SvgBuilder {
    fn create(container: Container, width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            container,
            fit: Fit::new(container, width, height),
        }
    }

    fn text(&mut self, x: f64, y: f64, text: &str, font: &Font<'_>, style: &TextStyle<'_>) -> ElementId {
        self.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="{:.1}" font-style="{}" font-weight="{}" fill="{}" stroke="{}" stroke-width="{:.1}" text-anchor="middle" dominant-baseline="hanging">{}</text>"#,
            x,
            y,
            escape(font.family),
            font.size,
            escape(font.style),
            escape(font.weight),
            escape(style.fill),
            escape(style.stroke.color),
            style.stroke.width,
            escape(text)
        ))
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &Stroke<'_>) -> ElementId {
        self.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"{}/>"#,
            x1,
            y1,
            x2,
            y2,
            stroke_attrs(Some(stroke))
        ))
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &ShapeStyle<'_>) -> ElementId {
        let radius = match style.corner_radius {
            Some(r) if r > 0.0 => format!(r#" rx="{:.1}" ry="{:.1}""#, r, r),
            _ => String::new(),
        };
        self.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}"{}{}{}/>"#,
            x,
            y,
            width,
            height,
            radius,
            fill_attr(style.fill),
            stroke_attrs(style.stroke.as_ref())
        ))
    }

    fn circle(&mut self, cx: f64, cy: f64, radius: f64, style: &ShapeStyle<'_>) -> ElementId {
        self.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}"{}{}/>"#,
            cx,
            cy,
            radius,
            fill_attr(style.fill),
            stroke_attrs(style.stroke.as_ref())
        ))
    }
}

/// Escape text for use in element content and double-quoted attributes.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ═══════════════════════════════════════════════════════════════════════
// Unknown chord placeholder
// ═══════════════════════════════════════════════════════════════════════

/// Placeholder shown in place of a chord that has no diagram.
pub fn unknown_chord_svg(name: &str, container: Container) -> String {
    let Container { width, height } = container;
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">\
         <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\" fill=\"gray\">? {}</text>\
         </svg>",
        width / 2.0,
        height / 2.0,
        escape(name),
        w = width,
        h = height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> SvgBuilder {
        SvgBuilder::create(Container::new(200.0, 240.0), 100.0, 120.0)
    }

    #[test]
    fn wraps_elements_in_fit_group() {
        let mut svg = surface();
        svg.line(0.0, 0.0, 10.0, 10.0, &Stroke { color: "#666", width: 1.0 });
        assert_eq!(svg.len(), 1);
        let out = svg.build();
        assert!(out.starts_with("<svg"));
        assert!(out.contains(r#"width="200" height="240""#));
        assert!(out.contains("translate(0.00,0.00) scale(2.0000)"));
        assert!(out.contains(r##"<line x1="0.0" y1="0.0" x2="10.0" y2="10.0" stroke="#666" stroke-width="1.0"/>"##));
        assert!(out.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn element_ids_follow_drawing_order() {
        let mut svg = surface();
        let style = ShapeStyle { fill: Some("#000"), ..Default::default() };
        assert_eq!(svg.circle(1.0, 1.0, 1.0, &style), ElementId(0));
        assert_eq!(svg.rect(0.0, 0.0, 1.0, 1.0, &style), ElementId(1));
    }

    #[test]
    fn rect_without_stroke_or_radius() {
        let mut svg = surface();
        svg.rect(1.0, 2.0, 3.0, 4.0, &ShapeStyle { fill: Some("#666"), ..Default::default() });
        let out = svg.build();
        assert!(out.contains(r##"<rect x="1.0" y="2.0" width="3.0" height="4.0" fill="#666" stroke="none"/>"##));
    }

    #[test]
    fn text_is_escaped_and_centered() {
        let mut svg = surface();
        let font = Font { family: "\"Segoe UI\", sans-serif", size: 10.0, style: "light", weight: "100" };
        let stroke = Stroke { color: "#666", width: 1.0 };
        svg.text(5.0, 5.0, "<b>&", &font, &TextStyle { stroke, fill: "#666" });
        let out = svg.build();
        assert!(out.contains("&lt;b&gt;&amp;</text>"));
        assert!(out.contains("font-family=\"&quot;Segoe UI&quot;, sans-serif\""));
        assert!(out.contains(r#"text-anchor="middle""#));
    }

    #[test]
    fn unknown_chord_placeholder_names_chord() {
        let out = unknown_chord_svg("Bdim", Container::new(100.0, 120.0));
        assert!(out.starts_with("<svg"));
        assert!(out.contains("? Bdim"));
    }
}
