use ringplot::{
    prelude::*,
    rings::{AxisLabel, TickConfig},
};

mod common;
use common::{chromosomes, init, Op, RecordingCanvas};

fn genes(chrs: &[FeatureRef]) -> Vec<FeatureRef> {
    vec![
        BasicFeature::new("g1", 10, 20).with_location(chrs[0].clone()).into_ref(),
        BasicFeature::new("g2", 30, 60).with_location(chrs[1].clone()).into_ref(),
        BasicFeature::new("g3", 70, 90).with_location(chrs[0].clone()).into_ref(),
    ]
}

fn styled(angle: Angle) -> Axis {
    Axis {
        label: AxisLabel {
            text: String::from("depth"),
            ..Default::default()
        },
        line_style: LineStyle::solid(VizColor::BLACK, 1.0),
        tick: TickConfig {
            line_style: LineStyle::solid(VizColor::BLACK, 0.5),
            length: 2.0,
            ..Default::default()
        },
        grid: LineStyle::solid(VizColor::from_rgba8(0, 0, 0, 64), 0.25),
        ..Axis::new(angle)
    }
}

#[test]
fn grid_arcs_span_each_location() {
    init();
    let chrs = chromosomes(&[100, 100]);
    let layout = GappedArcs::new(&Arc::complete(Angle::ZERO), &chrs, Angle(0.1)).unwrap();
    let axis = styled(Angle::ZERO);

    let mut canvas = RecordingCanvas::new();
    let center = VizPoint2d::new(0.0, 0.0);
    axis.draw_at(&mut canvas, center, &genes(&chrs), &layout, 50.0, 70.0, 0.0, 10.0);

    // Two locations times five ticks (0, 2.5, 5, 7.5, 10), then the axis line and five tick marks.
    let strokes = canvas.strokes();
    assert_eq!(strokes.len(), 10 + 1 + 5);

    let chr1 = layout.arc_of(Some(chrs[0].as_ref()), None).unwrap();
    let chr2 = layout.arc_of(Some(chrs[1].as_ref()), None).unwrap();
    let grid_spans: Vec<(Angle, f64)> = strokes[..10]
        .iter()
        .map(|p| match p.components()[1] {
            PathComp::Arc { start, radius, .. } => (start, radius),
            other => panic!("expected a grid arc, got {:?}", other),
        })
        .collect();
    assert_eq!(grid_spans[0], (chr1.theta, 50.0));
    assert_eq!(grid_spans[4], (chr1.theta, 70.0));
    assert_eq!(grid_spans[5], (chr2.theta, 50.0));
    assert_eq!(grid_spans[7], (chr2.theta, 60.0));

    assert_eq!(canvas.texts(), vec!["0", "5", "10", "depth"]);
}

#[test]
fn labels_flip_on_the_left() {
    init();
    let chrs = chromosomes(&[100]);
    let layout = GappedArcs::new(&Arc::complete(Angle::ZERO), &chrs, Angle::ZERO).unwrap();
    let axis = styled(Angle::from_degrees(135.0));

    let mut canvas = RecordingCanvas::new();
    axis.draw_at(&mut canvas, VizPoint2d::default(), &[], &layout, 10.0, 20.0, 0.0, 1.0);

    let texts = canvas.texts().len();
    assert_eq!(texts, 4);
    let pushes = canvas.ops.iter().filter(|op| matches!(op, Op::Push)).count();
    let pops = canvas.ops.iter().filter(|op| matches!(op, Op::Pop)).count();
    assert_eq!((pushes, pops), (texts, texts));

    for op in &canvas.ops {
        if let Op::Rotate(angle) = op {
            assert!(angle.approx_eq(Angle::from_degrees(315.0), 1e-9));
        }
        if let Op::Text { x_align, .. } = op {
            assert_eq!(*x_align, -1.0);
        }
    }
}

#[test]
fn empty_range_draws_line_and_label_only() {
    init();
    let chrs = chromosomes(&[100]);
    let layout = GappedArcs::new(&Arc::complete(Angle::ZERO), &chrs, Angle::ZERO).unwrap();
    let axis = styled(Angle::ZERO);

    let mut canvas = RecordingCanvas::new();
    axis.draw_at(&mut canvas, VizPoint2d::default(), &genes(&chrs), &layout, 10.0, 20.0, 5.0, 5.0);

    assert_eq!(canvas.strokes().len(), 1);
    assert_eq!(canvas.texts(), vec!["depth"]);
}

#[test]
fn custom_ticks_outside_range_are_dropped() {
    init();
    let chrs = chromosomes(&[100]);
    let layout = GappedArcs::new(&Arc::complete(Angle::ZERO), &chrs, Angle::ZERO).unwrap();
    let mut axis = styled(Angle::ZERO);
    axis.grid = LineStyle::default();
    axis.tick.marker = Some(std::sync::Arc::new(|_: f64, _: f64| {
        vec![Tick::major(-5.0, "low"), Tick::major(3.0, "three"), Tick::minor(4.0), Tick::major(20.0, "high")]
    }));

    let mut canvas = RecordingCanvas::new();
    axis.draw_at(&mut canvas, VizPoint2d::default(), &[], &layout, 0.0, 10.0, 0.0, 10.0);

    assert_eq!(canvas.texts(), vec!["three", "depth"]);
    // Axis line, then one major and one minor tick.
    let strokes = canvas.strokes();
    assert_eq!(strokes.len(), 3);
    let tick_len = |p: &RingPath| match (p.components()[0], p.components()[1]) {
        (PathComp::MoveTo(a), PathComp::LineTo(b)) => (b - a).hypot(),
        other => panic!("unexpected tick path {:?}", other),
    };
    assert!((tick_len(strokes[1]) - 2.0).abs() < 1e-9);
    assert!((tick_len(strokes[2]) - 1.0).abs() < 1e-9);
}
