use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::content_view::ContentPane;
use crate::explorer_view::render_search;
use crate::explorer_view::render_tree;
use crate::filter::Visibility;
use crate::filter::apply_filter;
use crate::rows::ExplorerRow;
use crate::rows::visible_rows;
use crate::tree::NodeKey;
use crate::tree::TreeState;
use crate::tui::Tui;
use color_eyre::eyre::Result;
use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use docdex_catalog::Catalog;
use docdex_catalog::FileId;
use docdex_content::ContentResolver;
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use std::sync::Arc;
use tokio::select;
use tokio::sync::mpsc::unbounded_channel;

const CONTENT_SCROLL_STEP: u16 = 10;

enum ResolveTarget {
    File(String),
    Symbol(String),
}

pub(crate) struct App {
    catalog: Arc<Catalog>,
    resolver: Arc<ContentResolver>,
    app_event_tx: AppEventSender,

    tree: TreeState,
    visibility: Visibility,
    search: String,
    cursor: usize,
    content: ContentPane,

    /// Monotonic selection token. A resolver completion is applied only
    /// when its token still equals this value; anything older belongs to a
    /// selection the user already left.
    request_seq: u64,
}

impl App {
    pub(crate) async fn run(
        tui: &mut Tui,
        catalog: Arc<Catalog>,
        resolver: Arc<ContentResolver>,
    ) -> Result<()> {
        use tokio_stream::StreamExt;

        let (app_event_tx, mut app_event_rx) = unbounded_channel();
        let mut app = App::new(catalog, resolver, AppEventSender::new(app_event_tx));
        app.bootstrap();

        let mut terminal_events = EventStream::new();
        loop {
            tui.draw(|frame| app.draw(frame))?;
            select! {
                Some(event) = terminal_events.next() => {
                    match event? {
                        Event::Key(key) if key.kind != KeyEventKind::Release => {
                            if app.handle_key(key) {
                                break;
                            }
                        }
                        // Resizes are picked up by the next draw.
                        _ => {}
                    }
                }
                Some(event) = app_event_rx.recv() => app.handle_app_event(event),
                else => break,
            }
        }
        Ok(())
    }

    fn new(catalog: Arc<Catalog>, resolver: Arc<ContentResolver>, app_event_tx: AppEventSender) -> Self {
        Self {
            catalog,
            resolver,
            app_event_tx,
            tree: TreeState::default(),
            visibility: Visibility::default(),
            search: String::new(),
            cursor: 0,
            content: ContentPane::default(),
            request_seq: 0,
        }
    }

    /// Session startup: with a non-empty catalog the first file is marked
    /// active, force-expanded, and its content resolution kicked off.
    fn bootstrap(&mut self) {
        let Some(first) = self.catalog.first_file() else {
            return;
        };
        let id = first.id;
        let name = first.name.clone();
        self.tree.expand(id);
        self.tree.set_active(NodeKey::File(name.clone()));
        self.spawn_resolve(ResolveTarget::File(name));
    }

    fn rows(&self) -> Vec<ExplorerRow> {
        visible_rows(&self.catalog, &self.tree, &self.visibility)
    }

    /// Returns true when the app should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            return true;
        }
        match key.code {
            KeyCode::Up => self.move_cursor_up(),
            KeyCode::Down => self.move_cursor_down(),
            KeyCode::Enter => self.activate_cursor_row(),
            KeyCode::PageUp => self.content.scroll_up(CONTENT_SCROLL_STEP),
            KeyCode::PageDown => self.content.scroll_down(CONTENT_SCROLL_STEP),
            KeyCode::Esc => self.clear_search(),
            KeyCode::Backspace => {
                self.search.pop();
                self.refilter();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.push(ch);
                self.refilter();
            }
            _ => {}
        }
        false
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::FragmentLoaded { token, fragment } => {
                if token != self.request_seq {
                    tracing::debug!(
                        "dropping stale fragment: token {token}, current {}",
                        self.request_seq
                    );
                    return;
                }
                self.content.show(fragment);
            }
        }
    }

    fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_cursor_down(&mut self) {
        let row_count = self.rows().len();
        if row_count > 0 && self.cursor + 1 < row_count {
            self.cursor += 1;
        }
    }

    fn activate_cursor_row(&mut self) {
        let rows = self.rows();
        let Some(row) = rows.get(self.cursor) else {
            return;
        };
        match row.key.clone() {
            NodeKey::File(name) => self.select_file(name, row.file_id),
            NodeKey::Symbol(name) => self.select_symbol(name, row.file_id),
        }
    }

    /// File header selection: toggle expansion, become the active node,
    /// resolve the file's fragment.
    fn select_file(&mut self, name: String, id: FileId) {
        self.tree.toggle(id);
        self.tree.set_active(NodeKey::File(name.clone()));
        self.clamp_cursor();
        self.spawn_resolve(ResolveTarget::File(name));
    }

    /// Symbol selection: become the active node (the file header is not),
    /// keep the owner subtree expanded so the selection stays visible, and
    /// resolve the symbol's fragment. Never toggles anything.
    fn select_symbol(&mut self, name: String, owner: FileId) {
        self.tree.expand(owner);
        self.tree.set_active(NodeKey::Symbol(name.clone()));
        self.spawn_resolve(ResolveTarget::Symbol(name));
    }

    fn clear_search(&mut self) {
        if !self.search.is_empty() {
            self.search.clear();
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        self.visibility = apply_filter(&self.catalog, &self.search, &mut self.tree);
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let row_count = self.rows().len();
        if row_count == 0 {
            self.cursor = 0;
        } else if self.cursor >= row_count {
            self.cursor = row_count - 1;
        }
    }

    fn spawn_resolve(&mut self, target: ResolveTarget) {
        self.request_seq += 1;
        let token = self.request_seq;
        let resolver = self.resolver.clone();
        let tx = self.app_event_tx.clone();
        tokio::spawn(async move {
            let fragment = match target {
                ResolveTarget::File(name) => resolver.resolve_file(&name).await,
                ResolveTarget::Symbol(name) => resolver.resolve_symbol(&name).await,
            };
            tx.send(AppEvent::FragmentLoaded { token, fragment });
        });
    }

    fn draw(&self, frame: &mut Frame) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(38), Constraint::Min(20)])
            .split(frame.area());
        let explorer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(panes[0]);

        render_search(frame, explorer[0], &self.search);
        render_tree(frame, explorer[1], &self.rows(), self.cursor, self.tree.active());
        self.content.render(frame, panes[1]);
    }
}
