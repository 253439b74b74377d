// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! End-to-end checks of the path-based entry points against real files.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};
use vicinity_analysis::analyzer::{AnalysisError, NeighborhoodAnalyzer, NotFound};
use vicinity_analysis::order::BubbleOrder;
use vicinity_analysis::{city_with_smallest_neighborhood, smallest_neighborhood};
use vicinity_model::loading::LoadErrorKind;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn road_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("create temp file");
    f.write_all(contents.as_bytes()).expect("write temp file");
    f.flush().expect("flush temp file");
    f
}

fn render(length: u32, cities: &[(u32, String)]) -> String {
    let mut s = format!("{} {}\n", length, cities.len());
    for (p, n) in cities {
        s.push_str(&format!("{p} {n}\n"));
    }
    s
}

fn assert_not_found(path: &Path) {
    assert_eq!(smallest_neighborhood(path), Err(NotFound));
    assert_eq!(city_with_smallest_neighborhood(path), Err(NotFound));
}

fn load_error_kind(path: &Path) -> LoadErrorKind {
    match NeighborhoodAnalyzer::new().analyze_path(path) {
        Err(AnalysisError::Load(e)) => e.kind(),
        other => panic!("Expected a load error, got {:?}", other.map(|r| r.smallest_width())),
    }
}

#[test]
fn test_two_cities_tie_resolves_west() {
    init_logger();
    let f = road_file("10 2\n2 A\n8 B\n");
    assert_eq!(smallest_neighborhood(f.path()), Ok(5.0));
    assert_eq!(city_with_smallest_neighborhood(f.path()), Ok("A".to_string()));
}

#[test]
fn test_three_cities_tie_resolves_west() {
    init_logger();
    let f = road_file("100 3\n10 X\n50 Y\n90 Z\n");
    assert_eq!(smallest_neighborhood(f.path()), Ok(30.0));
    assert_eq!(city_with_smallest_neighborhood(f.path()), Ok("X".to_string()));

    let report = NeighborhoodAnalyzer::new().analyze_path(f.path()).unwrap();
    let widths: Vec<f64> = report.iter().map(|n| n.width()).collect();
    assert_eq!(widths, vec![30.0, 40.0, 30.0]);
}

#[test]
fn test_names_with_spaces_and_crlf() {
    init_logger();
    let f = road_file("20 3\r\n5 New York\r\n6 San Jose\r\n7 Rio\r\n");
    assert_eq!(smallest_neighborhood(f.path()), Ok(1.0));
    assert_eq!(
        city_with_smallest_neighborhood(f.path()),
        Ok("San Jose".to_string())
    );
}

#[test]
fn test_missing_city_count_is_not_found() {
    init_logger();
    let f = road_file("10\n");
    assert_not_found(f.path());
    assert_eq!(load_error_kind(f.path()), LoadErrorKind::MalformedHeader);
}

#[test]
fn test_single_city_fails_to_load() {
    init_logger();
    let f = road_file("10 1\n5 Only\n");
    assert_not_found(f.path());
    assert_eq!(load_error_kind(f.path()), LoadErrorKind::MalformedHeader);
}

#[test]
fn test_unreadable_path_is_not_found() {
    init_logger();
    let dir = TempDir::new().unwrap();
    let missing: PathBuf = dir.path().join("no-such-road.txt");
    assert_not_found(&missing);
    assert_eq!(load_error_kind(&missing), LoadErrorKind::SourceUnreadable);

    // A directory opens on some platforms but never reads as a road.
    assert_not_found(dir.path());
}

#[test]
fn test_duplicate_position_anywhere_fails() {
    init_logger();
    let base: Vec<(u32, String)> = (1..=6).map(|i| (i * 10, format!("C{i}"))).collect();

    for dup_of in 0..base.len() {
        for at in 0..=base.len() {
            let mut cities = base.clone();
            cities.insert(at, (base[dup_of].0, "Twin".to_string()));
            let f = road_file(&render(100, &cities));

            assert_not_found(f.path());
            assert_eq!(load_error_kind(f.path()), LoadErrorKind::DuplicatePosition);
        }
    }
}

#[test]
fn test_positions_on_road_ends_fail() {
    init_logger();
    for input in ["10 2\n0 A\n5 B\n", "10 2\n5 A\n10 B\n", "10 2\n-3 A\n5 B\n"] {
        let f = road_file(input);
        assert_not_found(f.path());
        assert_eq!(load_error_kind(f.path()), LoadErrorKind::PositionOutOfRange);
    }

    let f = road_file("10 2\n1 A\n9 B\n");
    assert_eq!(smallest_neighborhood(f.path()), Ok(5.0));
}

#[test]
fn test_malformed_records_fail() {
    init_logger();
    for input in ["10 2\n2 A\n", "10 2\n2 A\nx B\n", "10 2\n2 A\n8\n"] {
        let f = road_file(input);
        assert_not_found(f.path());
        assert_eq!(load_error_kind(f.path()), LoadErrorKind::MalformedRecord);
    }
}

#[test]
fn test_widths_partition_the_road() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(7);
    for length in [3u32, 17, 1_000, 999_999] {
        let count = (length as usize - 1).min(200);
        let mut positions: Vec<u32> = (1..length).collect();
        positions.shuffle(&mut rng);
        let cities: Vec<(u32, String)> = positions[..count]
            .iter()
            .map(|&p| (p, format!("P{p}")))
            .collect();

        let f = road_file(&render(length, &cities));
        let report = NeighborhoodAnalyzer::new().analyze_path(f.path()).unwrap();
        assert_eq!(report.total_width(), f64::from(length));
        assert_eq!(report.len(), count);
    }
}

#[test]
fn test_file_order_does_not_change_the_answer() {
    init_logger();
    let cities: Vec<(u32, String)> = [3, 9, 14, 15, 40, 41, 77, 90]
        .iter()
        .map(|&p| (p, format!("Town {p}")))
        .collect();
    let f = road_file(&render(100, &cities));
    let expected_width = smallest_neighborhood(f.path()).unwrap();
    let expected_city = city_with_smallest_neighborhood(f.path()).unwrap();
    assert_eq!(expected_width, 3.0);
    assert_eq!(expected_city, "Town 14");

    let mut rng = StdRng::seed_from_u64(0xC1D);
    for _ in 0..20 {
        let mut shuffled = cities.clone();
        shuffled.shuffle(&mut rng);
        let g = road_file(&render(100, &shuffled));
        assert_eq!(smallest_neighborhood(g.path()), Ok(expected_width));
        assert_eq!(
            city_with_smallest_neighborhood(g.path()),
            Ok(expected_city.clone())
        );
    }
}

#[test]
fn test_loading_twice_gives_identical_results() {
    init_logger();
    let f = road_file("1000 5\n700 F\n3 A\n500 D\n250 C\n999 G\n");
    let analyzer = NeighborhoodAnalyzer::new();
    let first = analyzer.analyze_path(f.path()).unwrap();
    let second = analyzer.analyze_path(f.path()).unwrap();

    assert_eq!(first.neighborhoods(), second.neighborhoods());
    assert_eq!(first.city_with_smallest(), second.city_with_smallest());
}

#[test]
fn test_bubble_order_matches_default() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(99);
    let mut positions: Vec<u32> = (1..5_000).collect();
    positions.shuffle(&mut rng);
    let cities: Vec<(u32, String)> = positions[..300]
        .iter()
        .map(|&p| (p, format!("B{p}")))
        .collect();
    let f = road_file(&render(5_000, &cities));

    let bubble = NeighborhoodAnalyzer::with_order(BubbleOrder);
    assert_eq!(
        bubble.smallest_neighborhood(f.path()),
        smallest_neighborhood(f.path())
    );
    assert_eq!(
        bubble.city_with_smallest_neighborhood(f.path()),
        city_with_smallest_neighborhood(f.path())
    );
}
