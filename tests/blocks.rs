use ringplot::prelude::*;

mod common;
use common::{chromosomes, genome, init, Op, RecordingCanvas};

fn layout(features: &[FeatureRef], gap: Angle) -> SharedArcOfer {
    std::sync::Arc::new(GappedArcs::new(&Arc::complete(Angle::ZERO), features, gap).unwrap())
}

#[test]
fn inner_greater_than_outer_is_rejected() {
    init();
    let features = chromosomes(&[100, 200]);
    let base = layout(&features, Angle::ZERO);
    match Blocks::new(features.clone(), base, 80.0, 70.0) {
        Err(RingError::InvalidRange(_)) => {}
        other => panic!("expected InvalidRange, got {:?}", other.err()),
    }
    assert!(Blocks::new_gapped(features, &Arc::complete(Angle::ZERO), 80.0, 70.0, Angle::ZERO).is_err());
}

#[test]
fn unknown_features_are_rejected() {
    init();
    let features = chromosomes(&[100, 200]);
    let base = layout(&features, Angle::ZERO);
    let strangers = chromosomes(&[5]);
    assert!(matches!(
        Blocks::new(strangers, base, 70.0, 80.0),
        Err(RingError::NotFound(_))
    ));
}

#[test]
fn features_outside_their_location_are_rejected() {
    init();
    let (genome, mut chrs) = genome(&[100, 100]);
    chrs.push(
        BasicFeature::new("overhang", 150, 250)
            .with_location(genome.clone())
            .into_ref(),
    );
    let result = Blocks::new_gapped(chrs, &Arc::complete(Angle::ZERO), 70.0, 80.0, Angle(0.01));
    assert!(matches!(result, Err(RingError::InvalidRange(_))));
}

#[test]
fn each_block_is_an_annular_sector() {
    init();
    let features = chromosomes(&[100, 300]);
    let blocks = Blocks::new_gapped(features.clone(), &Arc::complete(Angle::ZERO), 50.0, 60.0, Angle(0.1))
        .unwrap()
        .with_color(VizColor::BLUE);

    let mut canvas = RecordingCanvas::new();
    let center = VizPoint2d::new(100.0, 100.0);
    blocks.draw_at(&mut canvas, center);

    let fills = canvas.fills();
    assert_eq!(fills.len(), 2);
    assert!(canvas.strokes().is_empty());

    for (f, path) in features.iter().zip(fills) {
        let arc = blocks.arc_of(None, Some(f.as_ref())).unwrap();
        let comps = path.components();
        assert_eq!(comps.len(), 4);
        assert_eq!(comps[0], PathComp::MoveTo(center + rectangular(arc.theta, 50.0)));
        assert_eq!(
            comps[1],
            PathComp::Arc {
                center,
                radius: 50.0,
                start: arc.theta,
                extent: arc.phi
            }
        );
        assert_eq!(
            comps[2],
            PathComp::Arc {
                center,
                radius: 60.0,
                start: arc.theta + arc.phi,
                extent: -arc.phi
            }
        );
        assert_eq!(comps[3], PathComp::Close);
    }
}

#[test]
fn feature_styles_override_block_styles() {
    init();
    let outline = LineStyle::solid(VizColor::BLACK, 1.5);
    let features: Vec<FeatureRef> = vec![
        BasicFeature::new("plain", 0, 10).into_ref(),
        BasicFeature::new("red", 0, 10).with_fill_color(VizColor::RED).into_ref(),
        BasicFeature::new("outlined", 0, 10)
            .with_line_style(LineStyle::solid(VizColor::GREEN, 3.0))
            .into_ref(),
        BasicFeature::new("hidden", 0, 10)
            .with_line_style(LineStyle::default())
            .into_ref(),
    ];
    let blocks = Blocks::new_gapped(features, &Arc::complete(Angle::ZERO), 10.0, 20.0, Angle(0.01))
        .unwrap()
        .with_color(VizColor::BLUE)
        .with_line_style(outline.clone());

    let mut canvas = RecordingCanvas::new();
    blocks.plot(&mut canvas);

    assert_eq!(
        canvas.colors(),
        vec![VizColor::BLUE, VizColor::RED, VizColor::BLUE, VizColor::BLUE]
    );
    let styles: Vec<LineStyle> = canvas
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::SetLineStyle(s) => Some(s.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        styles,
        vec![outline.clone(), outline, LineStyle::solid(VizColor::GREEN, 3.0)]
    );
}

#[test]
fn unstyled_blocks_draw_nothing() {
    init();
    let features = chromosomes(&[1, 2, 3]);
    let blocks = Blocks::new_gapped(features, &Arc::complete(Angle::ZERO), 10.0, 20.0, Angle(0.01)).unwrap();
    let mut canvas = RecordingCanvas::new();
    blocks.draw_at(&mut canvas, VizPoint2d::new(0.0, 0.0));
    assert!(canvas.ops.is_empty());
}

#[test]
fn zero_length_features_still_render() {
    init();
    let features = chromosomes(&[0, 10]);
    let blocks = Blocks::new_gapped(features.clone(), &Arc::complete(Angle::ZERO), 10.0, 20.0, Angle(0.1))
        .unwrap()
        .with_color(VizColor::RED);
    let mut canvas = RecordingCanvas::new();
    blocks.draw_at(&mut canvas, VizPoint2d::new(0.0, 0.0));
    assert_eq!(canvas.fills().len(), 2);
    assert_eq!(blocks.arc_of(None, Some(features[0].as_ref())).unwrap().phi, Angle::ZERO);
}

#[test]
fn blocks_share_their_layout() {
    init();
    let (genome, chrs) = genome(&[1000, 2000, 3000]);
    let outer = Blocks::new_gapped(chrs.clone(), &Arc::complete(Angle::QUARTER), 90.0, 100.0, Angle(0.02)).unwrap();

    // Genes placed within chromosomes reuse the chromosome layout.
    let genes: Vec<FeatureRef> = vec![
        BasicFeature::new("geneA", 100, 400).with_location(chrs[0].clone()).into_ref(),
        BasicFeature::new("geneB", 1500, 2500).with_location(chrs[1].clone()).into_ref(),
    ];
    let inner = Blocks::new(genes.clone(), outer.arc_ofer().unwrap(), 80.0, 88.0).unwrap();

    let chr = outer.arc_of(Some(chrs[0].as_ref()), None).unwrap();
    let gene = inner.arc_of(None, Some(genes[0].as_ref())).unwrap();
    assert!(gene.theta.approx_eq(chr.theta + chr.phi * 0.1, 1e-12));
    assert!(gene.phi.approx_eq(chr.phi * 0.3, 1e-12));

    let whole = outer.arc_of(Some(genome.as_ref()), None).unwrap();
    assert!(whole.theta.approx_eq(Angle::QUARTER, 1e-12));
    assert!(whole.phi.approx_eq(Angle::COMPLETE - Angle(0.02) * 3.0 + Angle(0.02) * 2.0, 1e-9));
}

#[test]
fn exons_nest_within_genes() {
    init();
    let chrs = chromosomes(&[1000]);
    let outer = Blocks::new_gapped(chrs.clone(), &Arc::new(Angle::ZERO, Angle::HALF), 90.0, 100.0, Angle::ZERO).unwrap();

    let gene = BasicFeature::new("gene", 100, 500).with_location(chrs[0].clone()).into_ref();
    let exon = BasicFeature::new("exon", 200, 300).with_location(gene.clone()).into_ref();
    let exons = Blocks::new(vec![exon.clone()], outer.arc_ofer().unwrap(), 80.0, 88.0)
        .unwrap()
        .with_color(VizColor::BLUE);

    let arc = exons.arc_of(None, Some(exon.as_ref())).unwrap();
    assert!(arc.theta.approx_eq(Angle::HALF * 0.2, 1e-12));
    assert!(arc.phi.approx_eq(Angle::HALF * 0.1, 1e-12));

    let mut canvas = RecordingCanvas::new();
    exons.draw_at(&mut canvas, VizPoint2d::new(0.0, 0.0));
    assert_eq!(canvas.fills().len(), 1);
}

#[test]
#[should_panic(expected = "no arc for feature")]
fn rendering_an_unplaced_feature_panics() {
    init();
    let features = chromosomes(&[10, 10]);
    let blocks = Blocks::new_gapped(features, &Arc::complete(Angle::ZERO), 10.0, 20.0, Angle(0.01))
        .unwrap()
        .with_color(VizColor::RED);
    let broken = Blocks {
        set: chromosomes(&[10]),
        ..blocks
    };
    broken.draw_at(&mut RecordingCanvas::new(), VizPoint2d::new(0.0, 0.0));
}
