use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stackscroll_foundation::StackContainable;
use stackscroll_testing::{FakeScrollView, FixedPage, ListPage, StackTestRule};
use stackscroll_ui_graphics::{EdgeInsets, Size};

const PAGE_COUNT_SAMPLES: &[usize] = &[4, 32, 256];
const ROWS_PER_LIST: usize = 200;
const ROW_HEIGHT: f32 = 60.0;
const VIEWPORT: Size = Size {
    width: 1080.0,
    height: 1920.0,
};

/// Alternating headers and lists.
fn stacked_pages(pages: usize) -> Vec<Rc<dyn StackContainable>> {
    (0..pages)
        .map(|index| -> Rc<dyn StackContainable> {
            if index % 2 == 0 {
                FixedPage::new(format!("header {index}"), 240.0)
            } else {
                ListPage::new(
                    format!("list {index}"),
                    FakeScrollView::rows(VIEWPORT.width, ROWS_PER_LIST, ROW_HEIGHT),
                    EdgeInsets::vertical(50.0),
                )
            }
        })
        .collect()
}

fn bench_layout_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_pass");
    for &pages in PAGE_COUNT_SAMPLES {
        let mut rule = StackTestRule::new(VIEWPORT);
        rule.set_pages(stacked_pages(pages));
        group.bench_with_input(BenchmarkId::from_parameter(pages), &pages, |b, _| {
            b.iter(|| {
                rule.controller_mut()
                    .relayout_items()
                    .expect("layout pass");
            });
        });
    }
    group.finish();
}

fn bench_scroll_adaptation(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_adaptation");
    for &pages in PAGE_COUNT_SAMPLES {
        let mut rule = StackTestRule::new(VIEWPORT);
        rule.set_pages(stacked_pages(pages));
        let content_height = rule.controller().content_size().expect("content size").height;
        let step = (content_height / 64.0).max(1.0);
        group.bench_with_input(BenchmarkId::from_parameter(pages), &pages, |b, _| {
            let mut offset = 0.0;
            b.iter(|| {
                offset = (offset + step) % content_height.max(1.0);
                rule.scroll_to(black_box(offset));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout_pass, bench_scroll_adaptation);
criterion_main!(benches);
