use gcodesvg_core::{ColorPolicy, CubicBezier, Point, Segment, SegmentKind, Toolpath};
use gcodesvg_render::{calculate_scale, convert, split_runs, RenderOptions};
use proptest::prelude::*;

fn segment_of(kind: SegmentKind, i: usize) -> Segment {
    let x = i as f64;
    let start = (x, 0.0);
    let end = (x + 1.0, 1.0);
    match kind {
        SegmentKind::Rapid => Segment::rapid(start, end),
        SegmentKind::Linear => Segment::linear(start, end),
        SegmentKind::Circular => Segment::circular(vec![CubicBezier::new(
            Point::new(x, 0.0),
            Point::new(x, 0.5),
            Point::new(x + 0.5, 1.0),
            Point::new(x + 1.0, 1.0),
        )]),
    }
}

fn segments() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec(0usize..3, 0..40).prop_map(|kinds| {
        kinds
            .into_iter()
            .enumerate()
            .map(|(i, k)| segment_of(SegmentKind::ALL[k], i))
            .collect()
    })
}

proptest! {
    #[test]
    fn runs_partition_input(segments in segments()) {
        let runs = split_runs(&segments);

        let rejoined: Vec<Segment> = runs.iter().flat_map(|r| r.segments.iter().cloned()).collect();
        prop_assert_eq!(&rejoined, &segments);

        for run in &runs {
            prop_assert!(!run.is_empty());
            prop_assert!(run.segments.iter().all(|s| s.kind() == run.kind));
        }
        for pair in runs.windows(2) {
            prop_assert_ne!(pair[0].kind, pair[1].kind);
        }
    }

    #[test]
    fn scale_fits_canvas(
        gw in 0.001f64..1000.0,
        gh in 0.001f64..1000.0,
        sw in 1.0f64..2000.0,
        sh in 1.0f64..2000.0,
    ) {
        let scale = calculate_scale(gw, gh, sw, sh);
        prop_assert!(scale * gw <= sw * (1.0 + 1e-12));
        prop_assert!(scale * gh <= sh * (1.0 + 1e-12));
        let fills_width = (scale * gw - sw).abs() <= sw * 1e-12;
        let fills_height = (scale * gh - sh).abs() <= sh * 1e-12;
        prop_assert!(fills_width || fills_height);
    }

    #[test]
    fn coloured_runs_drawn_in_order(segments in segments()) {
        let toolpath = Toolpath::from_segments(segments);
        let colors = ColorPolicy::new().with_linear("#111111").with_circular("#222222");
        let svg = convert(&toolpath, &colors, &RenderOptions::new("p", 100.0, 100.0));

        let expected: Vec<&str> = split_runs(&toolpath.segments)
            .iter()
            .filter_map(|run| colors.color_for(run.kind))
            .collect();
        let drawn: Vec<&str> = svg
            .match_indices("stroke:#")
            .map(|(at, _)| &svg[at + "stroke:".len()..at + "stroke:".len() + 7])
            .collect();
        // Rapids carry no colour, so they never show up in either list.
        prop_assert_eq!(drawn, expected);
    }
}
