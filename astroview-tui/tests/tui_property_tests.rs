use astroview_core::{
    FetchOutcome, FetchRequest, MediaType, PictureOfDay, RoverCamera, RoverInfo, RoverPhoto, Slot,
    Tab, ViewState, MAX_ROVER_PHOTOS,
};
use astroview_tui::api_client::{AstronomyApi, FetchError, ROVER_ENDPOINT};
use astroview_tui::config::{ApiCredentials, ConfigError, ThemeConfig, TuiConfig};
use astroview_tui::events::TuiEvent;
use astroview_tui::keys::{map_key, map_prompt_key, Action, PromptAction};
use astroview_tui::notifications::NotificationLevel;
use astroview_tui::runtime::{execute, FetchRuntime};
use astroview_tui::state::App;
use astroview_tui::theme::{media_type_color, notification_color, SynthBruteTheme};
use astroview_tui::views::render_view;
use async_trait::async_trait;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use proptest::prelude::*;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn base_config() -> TuiConfig {
    TuiConfig {
        api_base_url: "https://api.nasa.gov".to_string(),
        rover: "curiosity".to_string(),
        request_timeout_ms: Some(10_000),
        tick_rate_ms: 250,
        log_path: "tmp/astroview.log".into(),
        theme: ThemeConfig {
            name: "synthbrute".to_string(),
        },
        credentials: ApiCredentials::new("test-key"),
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn sample_picture(date: NaiveDate, media_type: MediaType) -> PictureOfDay {
    PictureOfDay {
        date,
        title: "The Horsehead Nebula".to_string(),
        explanation: "A dark nebula in Orion.".to_string(),
        url: "https://apod.nasa.gov/apod/image/horsehead.jpg".to_string(),
        media_type,
        copyright: Some(" Jane Doe ".to_string()),
        hdurl: None,
        service_version: Some("v1".to_string()),
    }
}

fn sample_photo(id: u64, sol: u32) -> RoverPhoto {
    RoverPhoto {
        id,
        img_src: format!("https://mars.nasa.gov/{}.jpg", id),
        camera: RoverCamera {
            full_name: "Mast Camera".to_string(),
            name: Some("MAST".to_string()),
        },
        rover: RoverInfo {
            name: "Curiosity".to_string(),
        },
        sol,
        earth_date: NaiveDate::from_ymd_opt(2015, 5, 30).unwrap(),
    }
}

fn render(app: &App) -> String {
    let backend = TestBackend::new(100, 32);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| render_view(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_requires_api_key() {
    let mut config = base_config();
    config.credentials = ApiCredentials::new("  ");
    assert!(matches!(config.validate(), Err(ConfigError::MissingApiKey)));
}

#[test]
fn config_requires_theme_name() {
    let mut config = base_config();
    config.theme = ThemeConfig {
        name: "unknown".to_string(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_zero_timeout_but_allows_none() {
    let mut config = base_config();
    config.request_timeout_ms = Some(0);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            field: "request_timeout_ms",
            ..
        })
    ));
    config.request_timeout_ms = None;
    assert!(config.validate().is_ok());
}

#[test]
fn config_rejects_non_http_base_url() {
    let mut config = base_config();
    config.api_base_url = "ftp://api.nasa.gov".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn config_from_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("astroview.toml");
    std::fs::write(
        &path,
        "rover = \"perseverance\"\nrequest_timeout_ms = 5000\n\n[theme]\nname = \"synthbrute\"\n",
    )
    .unwrap();

    let config = TuiConfig::from_path(&path).unwrap();
    assert_eq!(config.rover, "perseverance");
    assert_eq!(config.request_timeout_ms, Some(5000));
    assert_eq!(config.api_base_url, "https://api.nasa.gov");
    assert_eq!(config.tick_rate_ms, 250);
    assert!(config.credentials.api_key.is_empty());
}

#[test]
fn config_file_cannot_carry_api_key() {
    let err = TuiConfig::from_toml("api_key = \"DEMO_KEY\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn config_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TuiConfig::from_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

// ============================================================================
// Keys and theme
// ============================================================================

proptest! {
    #[test]
    fn keybinding_digit_switches_tab(digit in 1u8..=9u8) {
        let ch = char::from(b'0' + digit);
        let action = map_key(press(KeyCode::Char(ch), KeyModifiers::NONE));
        prop_assert_eq!(action, Some(Action::SwitchTab(usize::from(digit) - 1)));
    }

    #[test]
    fn keybinding_alt_digit_jumps_to_mission(digit in 1u8..=9u8) {
        let ch = char::from(b'0' + digit);
        let action = map_key(press(KeyCode::Char(ch), KeyModifiers::ALT));
        prop_assert_eq!(action, Some(Action::JumpToMission(usize::from(digit) - 1)));
    }

    #[test]
    fn prompt_accepts_only_digits_and_dash(ch in any::<char>()) {
        let action = map_prompt_key(press(KeyCode::Char(ch), KeyModifiers::NONE));
        if ch.is_ascii_digit() || ch == '-' {
            prop_assert_eq!(action, Some(PromptAction::Insert(ch)));
        } else {
            prop_assert_eq!(action, None);
        }
    }
}

#[test]
fn keybinding_navigation_keys() {
    assert_eq!(
        map_key(press(KeyCode::Tab, KeyModifiers::NONE)),
        Some(Action::NextTab)
    );
    assert_eq!(
        map_key(press(KeyCode::BackTab, KeyModifiers::SHIFT)),
        Some(Action::PrevTab)
    );
    assert_eq!(
        map_key(press(KeyCode::Left, KeyModifiers::NONE)),
        Some(Action::MoveLeft)
    );
    assert_eq!(
        map_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Action::Quit)
    );
    assert_eq!(map_key(press(KeyCode::Char('0'), KeyModifiers::NONE)), None);
}

#[test]
fn theme_colors_follow_palette() {
    let theme = SynthBruteTheme::default();
    assert_eq!(media_type_color(MediaType::Image, &theme), theme.primary);
    assert_eq!(media_type_color(MediaType::Video, &theme), theme.secondary);
    assert_eq!(
        notification_color(NotificationLevel::Warning, &theme),
        theme.warning
    );
    assert_eq!(
        notification_color(NotificationLevel::Error, &theme),
        theme.error
    );
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn render_startup_flow_for_picture_of_day() {
    let mut app = App::new(&base_config(), today());
    let request = app.start().remove(0);

    let screen = render(&app);
    assert!(screen.contains("AstroView"));
    assert!(screen.contains("Loading picture of the day..."));
    assert!(screen.contains("Data courtesy of NASA"));

    assert!(app.apply_outcome(FetchOutcome::PictureOfDay {
        token: request.token(),
        result: Ok(sample_picture(today(), MediaType::Image)),
    }));

    let screen = render(&app);
    assert!(screen.contains("The Horsehead Nebula"));
    assert!(screen.contains("A dark nebula in Orion."));
    assert!(screen.contains("Copyright: \u{00a9} Jane Doe"));
    assert!(screen.contains("Date: 2024-03-15"));
    assert!(screen.contains("https://apod.nasa.gov/apod/image/horsehead.jpg"));
    assert!(!screen.contains("This entry is a video"));
}

#[test]
fn render_high_resolution_url_when_present() {
    let mut app = App::new(&base_config(), today());
    let request = app.start().remove(0);
    let mut picture = sample_picture(today(), MediaType::Image);
    picture.hdurl = Some("https://apod.nasa.gov/apod/image/horsehead_big.jpg".to_string());
    app.apply_outcome(FetchOutcome::PictureOfDay {
        token: request.token(),
        result: Ok(picture),
    });

    let screen = render(&app);
    assert!(screen.contains("HD URL: https://apod.nasa.gov/apod/image/horsehead_big.jpg"));
    assert!(screen.contains("Loaded picture of the day for 2024-03-15"));
}

#[test]
fn render_picture_failure_shows_banner_only() {
    let mut app = App::new(&base_config(), today());
    let request = app.start().remove(0);
    app.apply_outcome(FetchOutcome::PictureOfDay {
        token: request.token(),
        result: Err("Failed to fetch picture of the day: HTTP status 503".to_string()),
    });

    let screen = render(&app);
    assert!(screen.contains("Failed to fetch picture of the day: HTTP status 503"));
    assert!(!screen.contains("URL:"));
    assert!(!screen.contains("No picture loaded"));
}

#[test]
fn render_video_notice() {
    let mut app = App::new(&base_config(), today());
    let request = app.start().remove(0);
    app.apply_outcome(FetchOutcome::PictureOfDay {
        token: request.token(),
        result: Ok(sample_picture(today(), MediaType::Video)),
    });
    assert!(render(&app).contains("This entry is a video. Open the URL to watch it."));
}

#[test]
fn render_rover_photos_and_empty_sol() {
    let mut app = App::new(&base_config(), today());
    app.start();
    let requests = app.handle_key(press(KeyCode::Char('2'), KeyModifiers::NONE), today());
    let request = requests[0];
    assert!(render(&app).contains("Loading rover photos..."));

    app.apply_outcome(FetchOutcome::RoverPhotos {
        token: request.token(),
        result: Ok(vec![sample_photo(1, 1000), sample_photo(2, 1000)]),
    });
    let screen = render(&app);
    assert!(screen.contains("Mast Camera | Curiosity | Sol 1000 | 2015-05-30"));
    assert!(screen.contains("Sol 1000 \u{00b7} 2 photos"));

    let request = app
        .handle_key(press(KeyCode::Right, KeyModifiers::NONE), today())
        .remove(0);
    app.apply_outcome(FetchOutcome::RoverPhotos {
        token: request.token(),
        result: Ok(Vec::new()),
    });
    let screen = render(&app);
    assert!(screen.contains("Sol: 1001"));
    assert!(screen.contains("No photos available for this Sol. Try a different day."));
}

#[test]
fn render_error_banner_hides_data() {
    let mut app = App::new(&base_config(), today());
    app.start();
    let request = app
        .handle_key(press(KeyCode::Char('2'), KeyModifiers::NONE), today())
        .remove(0);
    app.apply_outcome(FetchOutcome::RoverPhotos {
        token: request.token(),
        result: Err("Failed to fetch rover photos: HTTP status 500".to_string()),
    });

    let screen = render(&app);
    assert!(screen.contains("Failed to fetch rover photos: HTTP status 500"));
    assert!(screen.contains("Sol: 1000"));
    assert!(!screen.contains("No photos available"));
}

#[test]
fn render_missions_never_loading() {
    let mut app = App::new(&base_config(), today());
    app.start();
    app.handle_key(press(KeyCode::Char('3'), KeyModifiers::NONE), today());
    assert!(app.view.is_loading(Slot::PictureOfDay));

    let screen = render(&app);
    assert!(!screen.contains("Loading"));
    assert!(screen.contains("Apollo 11"));
    assert!(screen.contains("Mission 1/4"));
    assert!(screen.contains("First humans on the Moon"));

    app.handle_key(press(KeyCode::Left, KeyModifiers::NONE), today());
    let screen = render(&app);
    assert!(screen.contains("Mission 4/4"));
    assert!(screen.contains("Mars Pathfinder"));
}

#[test]
fn render_prompt_and_help_modal() {
    let mut app = App::new(&base_config(), today());
    app.start();
    app.handle_key(press(KeyCode::Char('d'), KeyModifiers::NONE), today());
    assert!(render(&app).contains("Date (YYYY-MM-DD): 2024-03-15_"));

    app.handle_key(press(KeyCode::Esc, KeyModifiers::NONE), today());
    app.handle_key(press(KeyCode::Char('?'), KeyModifiers::NONE), today());
    assert!(render(&app).contains("Keybindings"));
}

// ============================================================================
// Runtime
// ============================================================================

struct FakeApi {
    hang_on_sol: Option<u32>,
    hung_request_started: Arc<AtomicBool>,
    hung_request_dropped: Arc<AtomicBool>,
}

impl FakeApi {
    fn new(hang_on_sol: Option<u32>) -> Self {
        Self {
            hang_on_sol,
            hung_request_started: Arc::new(AtomicBool::new(false)),
            hung_request_dropped: Arc::new(AtomicBool::new(false)),
        }
    }
}

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl AstronomyApi for FakeApi {
    async fn fetch_picture_of_day(&self, date: NaiveDate) -> Result<PictureOfDay, FetchError> {
        Ok(sample_picture(date, MediaType::Image))
    }

    async fn fetch_rover_photos(&self, sol: u32) -> Result<Vec<RoverPhoto>, FetchError> {
        if self.hang_on_sol == Some(sol) {
            let _flag = DropFlag(Arc::clone(&self.hung_request_dropped));
            self.hung_request_started.store(true, Ordering::SeqCst);
            std::future::pending::<()>().await;
        }
        if sol == 13 {
            return Err(FetchError::HttpStatus {
                endpoint: ROVER_ENDPOINT,
                status: 500,
            });
        }
        Ok((0..20).map(|id| sample_photo(id, sol)).collect())
    }
}

async fn next_outcome(rx: &mut mpsc::Receiver<TuiEvent>) -> FetchOutcome {
    let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("no event within timeout")
        .expect("channel closed");
    match event {
        TuiEvent::Fetched(outcome) => *outcome,
        other => panic!("unexpected event {:?}", other),
    }
}

async fn wait_for(flag: &AtomicBool) {
    for _ in 0..200 {
        if flag.load(Ordering::SeqCst) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("flag was never set");
}

#[tokio::test]
async fn execute_reduces_errors_to_messages() {
    let mut view = ViewState::new(today());
    view.switch_tab(Tab::Mars);
    let request = view.set_sol(13).unwrap().unwrap();

    let outcome = execute(&FakeApi::new(None), request).await;
    assert_eq!(outcome.token(), request.token());
    assert!(matches!(
        outcome,
        FetchOutcome::RoverPhotos { result: Err(ref message), .. }
            if message == "Failed to fetch rover photos: HTTP status 500"
    ));
}

#[tokio::test]
async fn runtime_delivers_outcomes_to_view() {
    let (tx, mut rx) = mpsc::channel(16);
    let mut runtime = FetchRuntime::new(Arc::new(FakeApi::new(None)), tx);
    let mut view = ViewState::new(today());

    runtime.dispatch_all(view.initial_load());
    let request = view.switch_tab(Tab::Mars).unwrap();
    runtime.dispatch(request);

    for _ in 0..2 {
        let outcome = next_outcome(&mut rx).await;
        assert!(view.complete(outcome));
    }
    assert!(!view.loading());
    assert!(view.picture().is_some());
    assert_eq!(view.rover_photos().len(), MAX_ROVER_PHOTOS);
}

#[tokio::test]
async fn runtime_aborts_superseded_request() {
    let api = FakeApi::new(Some(1000));
    let started = Arc::clone(&api.hung_request_started);
    let dropped = Arc::clone(&api.hung_request_dropped);
    let (tx, mut rx) = mpsc::channel(16);
    let mut runtime = FetchRuntime::new(Arc::new(api), tx);
    let mut view = ViewState::new(today());

    let hung = view.switch_tab(Tab::Mars).unwrap();
    runtime.dispatch(hung);
    wait_for(&started).await;

    let latest = view.step_sol(1).unwrap().unwrap();
    assert!(matches!(latest, FetchRequest::RoverPhotos { sol: 1001, .. }));
    runtime.dispatch(latest);

    let outcome = next_outcome(&mut rx).await;
    assert_eq!(outcome.token(), latest.token());
    assert!(view.complete(outcome));
    assert_eq!(view.rover_photos()[0].sol, 1001);

    wait_for(&dropped).await;
    assert!(tokio::time::timeout(Duration::from_millis(100), rx.recv())
        .await
        .is_err());
}
