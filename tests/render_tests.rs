//! Rendering tests: render chords to SVG and inspect the emitted elements.

use chordlib::{
    render_chord_to_svg, render_named_chord_to_svg, render_progression, ChordBox, ChordBoxParams, ChordDefinition,
    ChordDictionary, Container, InputMode, RenderError, StringFret,
};
use pretty_assertions::assert_eq;

/// Element counts of an emitted SVG document.
#[derive(Debug, Default, PartialEq)]
struct Counts {
    rect: usize,
    line: usize,
    circle: usize,
    text: usize,
}

fn count_elements(svg: &str) -> Counts {
    let doc = roxmltree::Document::parse(svg).expect("SVG should be well-formed XML");
    let mut counts = Counts::default();
    for node in doc.descendants().filter(|n| n.is_element()) {
        match node.tag_name().name() {
            "rect" => counts.rect += 1,
            "line" => counts.line += 1,
            "circle" => counts.circle += 1,
            "text" => counts.text += 1,
            _ => {}
        }
    }
    counts
}

fn texts(svg: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(svg).unwrap();
    doc.descendants()
        .filter(|n| n.has_tag_name("text"))
        .filter_map(|n| n.text().map(str::to_string))
        .collect()
}

fn c_major() -> ChordDefinition {
    ChordDefinition::new(vec![
        StringFret::new(1, 0),
        StringFret::new(2, 1),
        StringFret::new(3, 0),
        StringFret::new(4, 2),
        StringFret::new(5, 3),
        StringFret::muted(6),
    ])
}

fn container() -> Container {
    Container::new(100.0, 120.0)
}

#[test]
fn c_major_end_to_end() {
    let svg = render_chord_to_svg(container(), &c_major(), &ChordBoxParams::compact()).unwrap();

    assert!(svg.starts_with("<svg"));
    assert_eq!(
        count_elements(&svg),
        Counts { rect: 1, line: 11, circle: 5, text: 1 }
    );
    assert_eq!(texts(&svg), vec!["X"]);
}

#[test]
fn builtin_c_matches_hand_built_chord() {
    let params = ChordBoxParams::compact();
    let from_dict = render_named_chord_to_svg(ChordDictionary::builtin(), "C", container(), &params).unwrap();
    let by_hand = render_chord_to_svg(container(), &c_major(), &params).unwrap();
    assert_eq!(from_dict, by_hand);
}

#[test]
fn tuning_row_is_drawn_by_default() {
    let svg = render_chord_to_svg(container(), &c_major(), &ChordBoxParams::default()).unwrap();

    // Six fret lines with the default five frets
    assert_eq!(count_elements(&svg).line, 12);
    assert_eq!(texts(&svg), vec!["E", "A", "D", "G", "B", "E", "X"]);
}

#[test]
fn empty_tuning_removes_row_and_widens_frets() {
    let params = ChordBoxParams::default();
    let chord_box = ChordBox::new(&params);

    let standard = c_major();
    let hidden = c_major().with_tuning(Vec::<String>::new());

    let with_row = chord_box.layout_for(&standard);
    let without_row = chord_box.layout_for(&hidden);
    assert_eq!(with_row.fret_spacing, with_row.height / 7.0);
    assert_eq!(without_row.fret_spacing, without_row.height / 6.0);
    assert!(without_row.fret_spacing > with_row.fret_spacing);

    let svg = render_chord_to_svg(container(), &hidden, &params).unwrap();
    assert_eq!(texts(&svg), vec!["X"]);
}

#[test]
fn barre_chord_above_the_nut() {
    let dict = ChordDictionary::builtin();
    let svg = render_named_chord_to_svg(dict, "C#m7", container(), &ChordBoxParams::compact()).unwrap();

    // Position number instead of the bridge, one rounded barre
    let counts = count_elements(&svg);
    assert_eq!(counts, Counts { rect: 1, line: 11, circle: 5, text: 2 });
    assert_eq!(texts(&svg), vec!["4", "X"]);
    assert!(svg.contains("rx="));
}

#[test]
fn barre_at_the_nut_keeps_the_bridge() {
    let svg =
        render_named_chord_to_svg(ChordDictionary::builtin(), "F", container(), &ChordBoxParams::compact()).unwrap();
    assert_eq!(count_elements(&svg), Counts { rect: 2, line: 11, circle: 6, text: 0 });
}

#[test]
fn fits_into_wide_container() {
    let svg = render_chord_to_svg(Container::new(200.0, 120.0), &c_major(), &ChordBoxParams::default()).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 200 120""#));
    assert!(svg.contains("translate(50.00,0.00) scale(1.0000)"));
}

#[test]
fn fits_into_small_square_container() {
    let svg = render_chord_to_svg(Container::new(60.0, 60.0), &c_major(), &ChordBoxParams::default()).unwrap();
    assert!(svg.contains("translate(5.00,0.00) scale(0.5000)"));
}

#[test]
fn zero_sized_container_is_an_error() {
    let err = render_chord_to_svg(Container::new(0.0, 120.0), &c_major(), &ChordBoxParams::default()).unwrap_err();
    assert!(matches!(err, RenderError::EmptyContainer { .. }));
}

#[test]
fn labels_are_escaped_and_gated() {
    let chord = ChordDefinition::new(vec![
        StringFret::labelled(1, 2, "<1>"),
        StringFret::labelled(2, 3, "2"),
        StringFret::new(3, 2),
    ]);
    let svg = render_chord_to_svg(container(), &chord, &ChordBoxParams::compact()).unwrap();
    assert!(svg.contains("&lt;1&gt;"));
    assert_eq!(texts(&svg), vec!["<1>", "2"]);

    let two = ChordDefinition::new(vec![StringFret::labelled(1, 2, "1"), StringFret::labelled(2, 3, "2")]);
    let svg = render_chord_to_svg(container(), &two, &ChordBoxParams::compact()).unwrap();
    assert!(texts(&svg).is_empty());
}

#[test]
fn progression_renders_each_chord() {
    let rendered = render_progression(
        ChordDictionary::builtin(),
        "C",
        "1 6 4 5 7",
        InputMode::Degree,
        true,
        container(),
        &ChordBoxParams::compact(),
    );

    let names: Vec<&str> = rendered.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["C", "Am", "F", "G", "Bdim"]);
    assert!(rendered[..4].iter().all(|r| r.svg.is_ok()));
    assert!(matches!(
        &rendered[4].svg,
        Err(RenderError::MissingChordDefinition(name)) if name == "Bdim"
    ));

    let placeholder = rendered[4].svg_or_placeholder(container());
    assert_eq!(texts(&placeholder), vec!["? Bdim"]);
}
