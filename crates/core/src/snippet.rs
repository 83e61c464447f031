//! Snippet generation: markup plus a self-contained script reproducing the widget.
//!
//! Everything here is a pure function of a [`SnippetInput`]. Identical inputs
//! produce byte-identical output.

use std::fmt::Write;

use crate::{
    axes::AxisRegistry,
    config::{CONTAINER_ID_PREFIX, FALLBACK_FONT_NAME, FONT_SIZE_MAX, FONT_SIZE_MIN},
    js,
    style::StyleSettings,
};

/// Generated markup and script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSnippet {
    pub html: String,
    pub js: String,
    pub container_id: String,
}

/// Everything the generator reads.
#[derive(Debug, Clone, Copy)]
pub struct SnippetInput<'a> {
    pub font_url: &'a str,
    pub font_size: u32,
    pub registry: &'a AxisRegistry,
    /// The applied style snapshot, never the draft.
    pub style: &'a StyleSettings,
}

/// Font name derived from the last path segment of `url`, without extension.
///
/// `https://host/fonts/SenteiaVF.woff2` gives `SenteiaVF`.
pub fn font_name(url: &str) -> &str {
    let segment = url.rsplit('/').next().unwrap_or_default();
    match segment.split('.').next() {
        Some(name) if !name.is_empty() => name,
        _ => FALLBACK_FONT_NAME,
    }
}

pub fn container_id(url: &str) -> String {
    format!("{CONTAINER_ID_PREFIX}{}", font_name(url))
}

/// The CSS `format()` hint for the font file at `url`.
pub fn font_format(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let extension = path.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("woff") => "woff",
        Some("ttf") => "truetype",
        Some("otf") => "opentype",
        _ => "woff2",
    }
}

/// Generate the markup and script for `input`.
pub fn generate(input: &SnippetInput) -> GeneratedSnippet {
    let container_id = container_id(input.font_url);
    let html = format!("<div id=\"{}\"></div>", escape_html(&container_id));
    let js = script(input, &container_id);
    GeneratedSnippet { html, js, container_id }
}

fn script(input: &SnippetInput, id: &str) -> String {
    let name = font_name(input.font_url);
    let style = input.style;
    let mut out = String::new();

    let comment_name: String = name.chars().filter(|c| !c.is_control()).collect();
    let _ = writeln!(out, "// {comment_name}-variable-font-displayer.js");
    out.push_str("(function() {\n");
    let _ = writeln!(out, "  const fontUrl = {};", js::string(input.font_url));
    let _ = writeln!(out, "  const fontName = {};", js::string(name));
    let _ = writeln!(out, "  const id = {};", js::string(id));
    let _ = writeln!(out, "  const initialText = {};", js::string(&style.initial_text));
    let _ = writeln!(out, "  const initialFontSize = {};", input.font_size);
    let _ = writeln!(
        out,
        "  const initialVariationSettings = {};",
        js::string(&input.registry.variation_settings())
    );
    let _ = writeln!(out, "  const axesValues = {};", axes_values(input.registry));
    let _ = writeln!(out, "  const fontAxes = {};", font_axes(input.registry));
    out.push('\n');

    out.push_str("  // Create and append style\n");
    out.push_str("  const style = document.createElement('style');\n");
    out.push_str("  style.textContent = [\n");
    for line in css(input, id) {
        let _ = writeln!(out, "    {},", js::string(&line));
    }
    out.push_str("  ].join('\\n');\n");
    out.push_str("  document.head.appendChild(style);\n");

    let _ = write!(
        out,
        r#"
  // Create main container
  const vfdContainer = document.createElement('div');
  vfdContainer.id = id;

  // Create sample text
  const sampleText = document.createElement('div');
  sampleText.className = 'vfd-sample-text';
  sampleText.contentEditable = 'true';
  sampleText.textContent = initialText;
  vfdContainer.appendChild(sampleText);

  function createSlider(labelText, valueText, min, max, step, value) {{
    const wrapper = document.createElement('div');
    wrapper.className = 'vfd-slider-wrapper';
    const label = document.createElement('div');
    label.className = 'vfd-label';
    const name = document.createElement('span');
    name.textContent = labelText;
    const current = document.createElement('span');
    current.textContent = valueText;
    label.appendChild(name);
    label.appendChild(current);
    const slider = document.createElement('input');
    slider.type = 'range';
    slider.min = String(min);
    slider.max = String(max);
    slider.step = String(step);
    slider.value = String(value);
    slider.className = 'vfd-slider';
    wrapper.appendChild(label);
    wrapper.appendChild(slider);
    vfdContainer.appendChild(wrapper);
    return {{ slider, current }};
  }}

  // Create font size slider
  const fontSize = createSlider('Font Size', initialFontSize + 'px', {size_min}, {size_max}, 1, initialFontSize);

  // Create axis sliders
  const axisSliders = fontAxes.map((axis) => {{
    const control = createSlider(axis.displayName, String(axesValues[axis.id]), axis.min, axis.max, axis.step, axesValues[axis.id]);
    control.slider.dataset.axis = axis.id;
    return control;
  }});

  // Function to update font settings
  function updateFontSettings() {{
    const settings = fontAxes.map((axis) => '"' + axis.id + '" ' + axesValues[axis.id]);
    sampleText.style.fontVariationSettings = settings.join(', ');
    sampleText.style.fontSize = fontSize.slider.value + 'px';
    fontSize.current.textContent = fontSize.slider.value + 'px';
  }}

  // Add event listeners
  fontSize.slider.addEventListener('input', updateFontSettings);

  axisSliders.forEach(({{ slider, current }}) => {{
    slider.addEventListener('input', (e) => {{
      axesValues[slider.dataset.axis] = parseFloat(e.target.value);
      current.textContent = e.target.value;
      updateFontSettings();
    }});
  }});

  // Initial update
  sampleText.style.fontVariationSettings = initialVariationSettings;
  updateFontSettings();

  // Append to the document
  document.body.appendChild(vfdContainer);
}})();
"#,
        size_min = FONT_SIZE_MIN,
        size_max = FONT_SIZE_MAX,
    );

    out
}

/// `{"wght":700,"wdth":100}`
fn axes_values(registry: &AxisRegistry) -> String {
    let entries: Vec<String> = registry
        .iter()
        .map(|(axis, value)| format!("{}:{}", js::key(&axis.id), js::number(value)))
        .collect();
    format!("{{{}}}", entries.join(","))
}

/// Axis definitions as an array, so slider order survives JavaScript key ordering.
fn font_axes(registry: &AxisRegistry) -> String {
    let entries: Vec<String> = registry
        .iter()
        .map(|(axis, value)| {
            let integral = [axis.min, axis.max, value].iter().all(|v| v.fract() == 0.0);
            let step = if integral { "1".to_string() } else { js::key("any") };
            format!(
                "{{\"id\":{},\"displayName\":{},\"min\":{},\"max\":{},\"default\":{},\"step\":{}}}",
                js::key(&axis.id),
                js::key(&axis.display_name),
                js::number(axis.min),
                js::number(axis.max),
                js::number(axis.default),
                step,
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}

/// Scoped style rules, one line per entry.
fn css(input: &SnippetInput, id: &str) -> Vec<String> {
    let s = input.style;
    let sel = format!("#{}", js::css_ident(id));
    let family = format!("'CustomFont-{}'", js::css_string(font_name(input.font_url)));
    let roundness = js::number(s.knob_roundness_pct);
    let knob_width = js::number(s.knob_width_px);
    let knob_height = js::number(s.knob_height_px);

    let mut rules = vec![
        "@font-face {".to_string(),
        format!("  font-family: {family};"),
        format!(
            "  src: url('{}') format('{}');",
            js::css_string(input.font_url),
            font_format(input.font_url)
        ),
        "}".to_string(),
        format!("{sel} {{"),
        "  font-family: sans-serif;".to_string(),
        "  max-width: 600px;".to_string(),
        "  margin: 0 auto;".to_string(),
        "  padding: 20px;".to_string(),
        format!("  background-color: {};", s.background_color),
        format!("  color: {};", s.text_color),
        "}".to_string(),
        format!("{sel} .vfd-sample-text {{"),
        format!("  font-family: {family}, sans-serif;"),
        format!("  font-size: {}px;", input.font_size),
        "  min-height: 100px;".to_string(),
        "  text-align: center;".to_string(),
        "  margin-bottom: 20px;".to_string(),
        "  padding: 10px;".to_string(),
        "  background-color: rgba(255, 255, 255, 0.1);".to_string(),
        "  border-radius: 5px;".to_string(),
        "  outline: none;".to_string(),
        "}".to_string(),
        format!("{sel} .vfd-slider-wrapper {{"),
        "  margin-bottom: 15px;".to_string(),
        "}".to_string(),
        format!("{sel} .vfd-slider {{"),
        "  -webkit-appearance: none;".to_string(),
        "  width: 100%;".to_string(),
        format!("  height: {}px;", js::number(s.line_weight_px)),
        format!("  background: {};", s.line_color),
        "  outline: none;".to_string(),
        "  opacity: 0.7;".to_string(),
        "  transition: opacity .2s;".to_string(),
        "}".to_string(),
        format!("{sel} .vfd-slider:hover {{"),
        "  opacity: 1;".to_string(),
        "}".to_string(),
    ];

    for (pseudo, vendor_reset) in
        [("::-webkit-slider-thumb", true), ("::-moz-range-thumb", false)]
    {
        rules.push(format!("{sel} .vfd-slider{pseudo} {{"));
        if vendor_reset {
            rules.push("  -webkit-appearance: none;".to_string());
            rules.push("  appearance: none;".to_string());
        }
        rules.push(format!("  width: {knob_width}px;"));
        rules.push(format!("  height: {knob_height}px;"));
        rules.push(format!("  background: {};", s.knob_color));
        rules.push("  cursor: pointer;".to_string());
        rules.push(format!("  border-radius: {roundness}%;"));
        rules.push("}".to_string());
    }

    rules.extend([
        format!("{sel} .vfd-label {{"),
        "  display: flex;".to_string(),
        "  justify-content: space-between;".to_string(),
        "  margin-bottom: 5px;".to_string(),
        "}".to_string(),
    ]);
    rules
}

/// Escape text for an HTML attribute value or element content.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// A standalone HTML page hosting `snippet`, for previewing in a browser.
pub fn demo_page(snippet: &GeneratedSnippet, title: &str) -> String {
    let title = escape_html(title);
    let script = snippet.js.replace("</script", "<\\/script");
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n{}\n<script>\n{script}</script>\n</body>\n</html>\n",
        snippet.html
    )
}
