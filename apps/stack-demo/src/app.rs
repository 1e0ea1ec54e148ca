//! Demo stack: a banner, two list pages and a footer in one outer scroll.

pub mod container_list;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use stackscroll_foundation::{
    InnerScrollPhase, ScrollHost, ScrollingStackController, StackContainable,
};
use stackscroll_ui_graphics::Size;

use crate::host::HeadlessScroll;
use container_list::{BannerPage, ContainerList, TableView};

const DEFAULT_VIEWPORT: Size = Size {
    width: 375.0,
    height: 667.0,
};
const DEFAULT_SCROLL_STEP: f32 = 120.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoOptions {
    pub viewport: Size,
    pub scroll_step: f32,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            viewport: DEFAULT_VIEWPORT,
            scroll_step: DEFAULT_SCROLL_STEP,
        }
    }
}

impl DemoOptions {
    /// Reads `STACK_DEMO_WIDTH`, `STACK_DEMO_HEIGHT` and
    /// `STACK_DEMO_SCROLL_STEP`, keeping defaults for unset variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let options = Self {
            viewport: Size::new(
                env_f32("STACK_DEMO_WIDTH", defaults.viewport.width)?,
                env_f32("STACK_DEMO_HEIGHT", defaults.viewport.height)?,
            ),
            scroll_step: env_f32("STACK_DEMO_SCROLL_STEP", defaults.scroll_step)?,
        };
        anyhow::ensure!(
            options.scroll_step > 0.0,
            "STACK_DEMO_SCROLL_STEP must be positive, got {}",
            options.scroll_step
        );
        Ok(options)
    }
}

fn env_f32(name: &str, default: f32) -> anyhow::Result<f32> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} is not a number: {value:?}")),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("reading {name}")),
    }
}

/// State of one list page after a scroll step.
#[derive(Clone, Debug, PartialEq)]
pub struct ListSnapshot {
    pub title: String,
    pub phase: InnerScrollPhase,
    pub live_rows: std::ops::Range<usize>,
}

pub struct DemoApp {
    host: Rc<RefCell<HeadlessScroll>>,
    controller: ScrollingStackController,
    lists: Vec<Rc<ContainerList>>,
    list_indices: Vec<usize>,
}

impl DemoApp {
    pub fn new(options: DemoOptions) -> anyhow::Result<Self> {
        let host = Rc::new(RefCell::new(HeadlessScroll::new(options.viewport)));
        let mut controller = ScrollingStackController::new();
        controller.bind_scroll_view(host.clone());
        controller.view_will_appear()?;

        let first = ContainerList::create("Inbox");
        let second = ContainerList::with_rows("Archive", 35);
        let pages: Vec<Rc<dyn StackContainable>> = vec![
            BannerPage::new("Banner", 180.0),
            first.clone(),
            BannerPage::new("Divider", 90.0),
            second.clone(),
            BannerPage::new("Footer", 140.0),
        ];
        controller.set_view_controllers(pages)?;

        Ok(Self {
            host,
            controller,
            lists: vec![first, second],
            list_indices: vec![1, 3],
        })
    }

    pub fn controller(&self) -> &ScrollingStackController {
        &self.controller
    }

    pub fn offset(&self) -> f32 {
        self.host.borrow().content_offset().y
    }

    pub fn attached_views(&self) -> usize {
        self.host.borrow().subview_count()
    }

    /// Scrolls the outer surface by `dy`. Returns `false` once the end of the
    /// content is reached.
    pub fn scroll_by(&mut self, dy: f32) -> anyhow::Result<bool> {
        let moved = self.host.borrow_mut().scroll_by(dy);
        if moved {
            self.controller.scroll_view_did_scroll()?;
        }
        Ok(moved)
    }

    /// Simulates a rotation or window resize.
    pub fn resize(&mut self, viewport: Size) -> anyhow::Result<()> {
        self.host.borrow_mut().set_viewport_size(viewport);
        self.controller.view_did_layout_subviews()?;
        Ok(())
    }

    pub fn lists(&self) -> &[Rc<ContainerList>] {
        &self.lists
    }

    pub fn snapshot(&self) -> anyhow::Result<Vec<ListSnapshot>> {
        self.lists
            .iter()
            .zip(&self.list_indices)
            .map(|(list, &index)| -> anyhow::Result<ListSnapshot> {
                let projection = self
                    .controller
                    .projection_at(index)?
                    .context("list page lost its scrollable appearance")?;
                Ok(ListSnapshot {
                    title: list.name().to_string(),
                    phase: projection.phase,
                    live_rows: list.table().borrow().live_rows(),
                })
            })
            .collect()
    }
}

fn describe(snapshot: &ListSnapshot) -> String {
    if snapshot.live_rows.is_empty() {
        format!("{}: {:?}, no cells", snapshot.title, snapshot.phase)
    } else {
        format!(
            "{}: {:?}, {}..={}",
            snapshot.title,
            snapshot.phase,
            TableView::title_for_row(snapshot.live_rows.start),
            TableView::title_for_row(snapshot.live_rows.end - 1)
        )
    }
}

/// Scrolls from top to bottom, logging what every list keeps alive.
pub fn run(options: DemoOptions) -> anyhow::Result<()> {
    let mut app = DemoApp::new(options)?;
    let content = app.controller().content_size()?;
    log::info!(
        "Stack of {} pages, content {}x{}, viewport {}x{}",
        app.controller().items().len(),
        content.width,
        content.height,
        options.viewport.width,
        options.viewport.height
    );

    loop {
        let lines: Vec<String> = app.snapshot()?.iter().map(describe).collect();
        log::info!("offset {:>7.1} | {}", app.offset(), lines.join(" | "));
        if !app.scroll_by(options.scroll_step)? {
            break;
        }
    }

    for list in app.lists() {
        log::info!(
            "{} peaked at {} live cells",
            list.name(),
            list.table().borrow().peak_cells()
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/demo_tests.rs"]
mod tests;
