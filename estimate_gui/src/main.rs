//! # BuildCost GUI Application
//!
//! Mobile-styled estimator built with Iced (native and WASM). The app walks
//! through onboarding and a stubbed sign-in, then shows five tabs: Home,
//! Estimate, Projects, Bills and Settings.
//!
//! All state lives in [`App`]; screens in [`ui`] are pure view functions
//! that emit [`Message`]s.

mod draft;
#[cfg(not(target_arch = "wasm32"))]
mod logging;
mod ui;

use iced::widget::{column, container, scrollable};
use iced::{Element, Length, Task, Theme};
use uuid::Uuid;

use estimate_core::calculations::RateSheet;
use estimate_core::documents::DocumentKind;
use estimate_core::materials::Material;
use estimate_core::project::{Project, ProjectType};
use estimate_core::session::{LoginForm, Session, SignupForm};
use estimate_core::settings::{AppSettings, Currency};
use estimate_core::workspace::Workspace;

use draft::EstimateDraft;
use ui::onboarding::SLIDES;
use ui::status_bar::{Toast, ToastKind};

// ============================================================================
// State
// ============================================================================

/// Where the user is in the sign-in flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Onboarding slide index
    Onboarding(usize),
    Login,
    Signup,
    Main,
}

/// Screens reachable once signed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Input,
    Result,
    Breakdown,
    Projects,
    Bills,
    Settings,
}

/// Rate edits in progress on the breakdown screen.
#[derive(Debug, Clone)]
pub struct RateEditor {
    pub sheet: RateSheet,
    /// Raw text per line, as typed
    pub inputs: Vec<String>,
    pub error: Option<String>,
}

impl RateEditor {
    fn for_project(project: &Project) -> Self {
        let sheet = project.rate_sheet();
        let inputs = sheet.lines().iter().map(|l| l.rate.to_string()).collect();
        RateEditor {
            sheet,
            inputs,
            error: None,
        }
    }

    /// Apply typed text to line `index`, then report the first field that
    /// still holds a rejected rate.
    fn edit(&mut self, index: usize, raw: String) {
        if let Some(slot) = self.inputs.get_mut(index) {
            *slot = raw.clone();
        }
        let _ = self.sheet.set_rate_text(index, &raw);

        let mut check = self.sheet.clone();
        self.error = self
            .inputs
            .iter()
            .enumerate()
            .find_map(|(i, text)| check.set_rate_text(i, text).err())
            .map(|e| e.to_string());
    }

    pub fn can_commit(&self) -> bool {
        self.error.is_none()
    }
}

/// Application state
pub struct App {
    pub stage: Stage,
    pub screen: Screen,
    pub settings: AppSettings,
    pub session: Option<Session>,
    pub workspace: Workspace,
    pub login: LoginForm,
    pub signup: SignupForm,
    pub draft: EstimateDraft,
    /// The estimate being viewed (fresh or opened from the project list)
    pub current: Option<Project>,
    pub rates: Option<RateEditor>,
    pub document_kind: DocumentKind,
    pub document_query: String,
    pub toast: Option<Toast>,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Onboarding
    OnboardingNext,
    OnboardingSkip,

    // Login
    LoginEmailChanged(String),
    LoginPasswordChanged(String),
    RememberMeToggled(bool),
    ForgotPassword,
    LoginSubmit,
    ShowSignup,

    // Signup
    SignupNameChanged(String),
    SignupEmailChanged(String),
    SignupCompanyChanged(String),
    SignupPasswordChanged(String),
    SignupConfirmChanged(String),
    TermsToggled(bool),
    SignupSubmit,
    ShowLogin,

    // Navigation
    Navigate(Screen),

    // Estimate form
    ProjectNameChanged(String),
    ProjectTypeSelected(ProjectType),
    LengthChanged(String),
    BreadthChanged(String),
    HeightChanged(String),
    ThicknessChanged(String),
    LocationChanged(String),
    MaterialToggled(Material, bool),
    CalculateEstimate,

    // Result
    ViewBreakdown,
    SaveProject,
    ShareReport,
    DownloadReport,
    OpenProject(Uuid),

    // Breakdown
    RateChanged(usize, String),
    Recalculate,

    // Bills & documents
    DocumentKindSelected(DocumentKind),
    DocumentSearchChanged(String),
    UploadDocument,

    // Settings
    DarkModeToggled(bool),
    CurrencySelected(Currency),
    BackupData,
    RestoreData,

    DismissToast,
}

impl Default for App {
    fn default() -> Self {
        Self::with_settings(AppSettings::default())
    }
}

impl App {
    fn new() -> (Self, Task<Message>) {
        (Self::with_settings(AppSettings::from_env()), Task::none())
    }

    fn with_settings(settings: AppSettings) -> Self {
        App {
            stage: Stage::Onboarding(0),
            screen: Screen::Home,
            settings,
            session: None,
            workspace: Workspace::with_samples(),
            login: LoginForm::default(),
            signup: SignupForm::default(),
            draft: EstimateDraft::default(),
            current: None,
            rates: None,
            document_kind: DocumentKind::Bill,
            document_query: String::new(),
            toast: None,
        }
    }

    fn theme(&self) -> Theme {
        if self.settings.theme.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn notify(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast {
            kind,
            message: message.into(),
        });
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // ===== Onboarding =====
            Message::OnboardingNext => {
                if let Stage::Onboarding(slide) = self.stage {
                    self.stage = if slide + 1 < SLIDES.len() {
                        Stage::Onboarding(slide + 1)
                    } else {
                        Stage::Login
                    };
                }
            }
            Message::OnboardingSkip => self.stage = Stage::Login,

            // ===== Login =====
            Message::LoginEmailChanged(v) => self.login.email = v,
            Message::LoginPasswordChanged(v) => self.login.password = v,
            Message::RememberMeToggled(v) => self.login.remember_me = v,
            Message::ForgotPassword => self.notify(ToastKind::Info, "Password reset link sent to your email"),
            Message::LoginSubmit => match self.login.submit() {
                Ok(session) => {
                    self.sign_in(session);
                    self.notify(ToastKind::Success, "Welcome back!");
                }
                Err(e) => self.notify(ToastKind::Error, e.to_string()),
            },
            Message::ShowSignup => {
                self.toast = None;
                self.stage = Stage::Signup;
            }

            // ===== Signup =====
            Message::SignupNameChanged(v) => self.signup.full_name = v,
            Message::SignupEmailChanged(v) => self.signup.email = v,
            Message::SignupCompanyChanged(v) => self.signup.company = v,
            Message::SignupPasswordChanged(v) => self.signup.password = v,
            Message::SignupConfirmChanged(v) => self.signup.confirm_password = v,
            Message::TermsToggled(v) => self.signup.accept_terms = v,
            Message::SignupSubmit => match self.signup.submit() {
                Ok(session) => {
                    self.sign_in(session);
                    self.notify(ToastKind::Success, "Account created successfully!");
                }
                Err(e) => self.notify(ToastKind::Error, e.to_string()),
            },
            Message::ShowLogin => {
                self.toast = None;
                self.stage = Stage::Login;
            }

            // ===== Navigation =====
            Message::Navigate(screen) => self.navigate(screen),

            // ===== Estimate form =====
            Message::ProjectNameChanged(v) => self.draft.details.name = v,
            Message::ProjectTypeSelected(t) => self.draft.details.project_type = t,
            Message::LengthChanged(v) => self.draft.dimensions.length = v,
            Message::BreadthChanged(v) => self.draft.dimensions.breadth = v,
            Message::HeightChanged(v) => self.draft.dimensions.height = v,
            Message::ThicknessChanged(v) => self.draft.dimensions.thickness = v,
            Message::LocationChanged(v) => self.draft.details.location = v,
            Message::MaterialToggled(material, selected) => self.draft.set_selected(material, selected),
            Message::CalculateEstimate => match self.draft.estimate() {
                Ok(project) => {
                    self.current = Some(project);
                    self.rates = None;
                    self.screen = Screen::Result;
                    self.toast = None;
                }
                Err(e) => self.notify(ToastKind::Error, e.to_string()),
            },

            // ===== Result =====
            Message::ViewBreakdown => {
                if let Some(project) = &self.current {
                    self.rates = Some(RateEditor::for_project(project));
                    self.screen = Screen::Breakdown;
                }
            }
            Message::SaveProject => {
                if let Some(project) = &self.current {
                    self.workspace.save_project(project.clone());
                    self.notify(ToastKind::Success, "Project saved successfully!");
                }
            }
            Message::ShareReport => self.notify(ToastKind::Success, "Report ready to share!"),
            Message::DownloadReport => self.notify(ToastKind::Success, "Downloading PDF report..."),
            Message::OpenProject(id) => {
                if let Some(project) = self.workspace.get_project(&id) {
                    self.current = Some(project.clone());
                    self.rates = None;
                    self.screen = Screen::Result;
                }
            }

            // ===== Breakdown =====
            Message::RateChanged(index, raw) => {
                if let Some(editor) = &mut self.rates {
                    editor.edit(index, raw);
                }
            }
            Message::Recalculate => {
                if let Some(error) = self.rates.as_ref().and_then(|e| e.error.clone()) {
                    self.notify(ToastKind::Error, error);
                } else if let (Some(project), Some(editor)) = (&self.current, self.rates.take()) {
                    self.current = Some(project.recalculated(editor.sheet));
                    self.screen = Screen::Result;
                }
            }

            // ===== Bills & documents =====
            Message::DocumentKindSelected(kind) => self.document_kind = kind,
            Message::DocumentSearchChanged(q) => self.document_query = q,
            Message::UploadDocument => self.notify(ToastKind::Info, "Upload feature coming soon!"),

            // ===== Settings =====
            Message::DarkModeToggled(dark) => {
                if dark != self.settings.theme.is_dark() {
                    self.settings.theme = self.settings.theme.toggled();
                }
            }
            Message::CurrencySelected(currency) => {
                tracing::debug!(currency = currency.code(), "display currency changed");
                self.settings.currency = currency;
            }
            Message::BackupData => self.notify(ToastKind::Success, "Data backed up successfully!"),
            Message::RestoreData => self.notify(ToastKind::Success, "Data restored successfully!"),

            Message::DismissToast => self.toast = None,
        }

        Task::none()
    }

    fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.stage = Stage::Main;
        self.screen = Screen::Home;
        // credentials are not kept once the session is open
        self.login.password.clear();
        self.signup.password.clear();
        self.signup.confirm_password.clear();
    }

    fn navigate(&mut self, screen: Screen) {
        // result and breakdown need an estimate to show
        let screen = match screen {
            Screen::Result | Screen::Breakdown if self.current.is_none() => Screen::Input,
            other => other,
        };
        if screen == Screen::Breakdown && self.rates.is_none() {
            self.rates = self.current.as_ref().map(RateEditor::for_project);
        }
        self.screen = screen;
        self.toast = None;
    }

    fn view(&self) -> Element<'_, Message> {
        let page: Element<'_, Message> = match self.stage {
            Stage::Onboarding(slide) => ui::onboarding::view(slide),
            Stage::Login => ui::login::view(&self.login),
            Stage::Signup => ui::signup::view(&self.signup),
            Stage::Main => self.view_main(),
        };

        let mut layout = column![page];
        if let Some(toast) = &self.toast {
            layout = layout.push(ui::status_bar::view_toast(toast));
        }
        if self.stage == Stage::Main {
            layout = layout.push(ui::nav_bar::view_nav_bar(self.screen));
        }

        container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_main(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match (self.screen, &self.current) {
            (Screen::Home, _) => ui::home::view(&self.workspace),
            (Screen::Input, _) => ui::project_input::view(&self.draft),
            (Screen::Result, Some(project)) => ui::estimation_result::view(project),
            (Screen::Breakdown, Some(project)) => match &self.rates {
                Some(editor) => ui::cost_breakdown::view(project, editor),
                None => ui::estimation_result::view(project),
            },
            (Screen::Result | Screen::Breakdown, None) => ui::project_input::view(&self.draft),
            (Screen::Projects, _) => ui::my_projects::view(&self.workspace),
            (Screen::Bills, _) => {
                ui::bills_documents::view(&self.workspace, self.document_kind, &self.document_query)
            }
            (Screen::Settings, _) => ui::settings::view(&self.settings),
        };

        scrollable(container(content).padding(16).width(Length::Fill))
            .height(Length::Fill)
            .into()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> iced::Result {
    logging::init_logging(estimate_core::settings::Environment::from_env());
    run()
}

#[cfg(target_arch = "wasm32")]
fn main() -> iced::Result {
    console_error_panic_hook::set_once();
    run()
}

fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title("BuildCost")
        .theme(App::theme)
        .window_size((420.0, 820.0))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> App {
        let mut app = App::default();
        app.update(Message::OnboardingSkip);
        app.update(Message::LoginEmailChanged("engineer@example.com".into()));
        app.update(Message::LoginPasswordChanged("pw".into()));
        app.update(Message::LoginSubmit);
        app
    }

    fn fill_house(app: &mut App) {
        app.update(Message::LengthChanged("20".into()));
        app.update(Message::BreadthChanged("15".into()));
        app.update(Message::HeightChanged("3".into()));
    }

    #[test]
    fn test_onboarding_walks_all_slides() {
        let mut app = App::default();
        for _ in 0..SLIDES.len() - 1 {
            app.update(Message::OnboardingNext);
        }
        assert_eq!(app.stage, Stage::Onboarding(SLIDES.len() - 1));
        app.update(Message::OnboardingNext);
        assert_eq!(app.stage, Stage::Login);
    }

    #[test]
    fn test_login_requires_fields() {
        let mut app = App::default();
        app.update(Message::OnboardingSkip);
        app.update(Message::LoginSubmit);
        assert_eq!(app.stage, Stage::Login);
        assert_eq!(app.toast.as_ref().map(|t| t.kind), Some(ToastKind::Error));

        let app = signed_in();
        assert_eq!(app.stage, Stage::Main);
        assert_eq!(app.session.as_ref().map(|s| s.email.as_str()), Some("engineer@example.com"));
        assert!(app.login.password.is_empty());
    }

    #[test]
    fn test_estimate_then_save() {
        let mut app = signed_in();
        app.update(Message::Navigate(Screen::Input));
        fill_house(&mut app);
        app.update(Message::MaterialToggled(Material::Sand, false));
        app.update(Message::MaterialToggled(Material::Gravel, false));
        app.update(Message::CalculateEstimate);

        assert_eq!(app.screen, Screen::Result);
        let project = app.current.clone().unwrap();
        assert_eq!(project.total_cost, 538650.0);
        assert_eq!(project.name, "Building Project");

        app.update(Message::SaveProject);
        assert_eq!(app.workspace.project_count(), 3);
        assert_eq!(app.workspace.projects()[0].id, project.id);
    }

    #[test]
    fn test_breakdown_recalculates_current() {
        let mut app = signed_in();
        fill_house(&mut app);
        app.update(Message::CalculateEstimate);
        app.update(Message::ViewBreakdown);
        assert_eq!(app.screen, Screen::Breakdown);

        app.update(Message::RateChanged(0, "500".into()));
        app.update(Message::RateChanged(1, "abc".into()));
        app.update(Message::Recalculate);

        let project = app.current.as_ref().unwrap();
        assert_eq!(app.screen, Screen::Result);
        assert_eq!(project.revision, 2);
        assert_eq!(project.materials[0].cost, 1197.0 * 500.0);
        assert_eq!(project.materials[1].cost, 0.0);
    }

    #[test]
    fn test_negative_rate_is_reported() {
        let mut app = signed_in();
        fill_house(&mut app);
        app.update(Message::CalculateEstimate);
        app.update(Message::ViewBreakdown);
        app.update(Message::RateChanged(0, "-3".into()));

        let editor = app.rates.as_ref().unwrap();
        assert!(editor.error.is_some());
        assert_eq!(editor.sheet.lines()[0].rate, 450.0);
        assert_eq!(editor.inputs[0], "-3");
    }

    #[test]
    fn test_recalculate_blocked_by_invalid_rate() {
        let mut app = signed_in();
        fill_house(&mut app);
        app.update(Message::CalculateEstimate);
        app.update(Message::ViewBreakdown);
        app.update(Message::RateChanged(0, "-3".into()));
        // a valid edit elsewhere must not clear the pending error
        app.update(Message::RateChanged(1, "900".into()));
        assert!(!app.rates.as_ref().unwrap().can_commit());

        app.update(Message::Recalculate);
        assert_eq!(app.screen, Screen::Breakdown);
        assert_eq!(app.current.as_ref().unwrap().revision, 1);
        assert_eq!(app.toast.as_ref().map(|t| t.kind), Some(ToastKind::Error));

        app.update(Message::RateChanged(0, "500".into()));
        assert!(app.rates.as_ref().unwrap().can_commit());
        app.update(Message::Recalculate);
        let project = app.current.as_ref().unwrap();
        assert_eq!(app.screen, Screen::Result);
        assert_eq!(project.revision, 2);
        assert_eq!(project.materials[0].cost, 1197.0 * 500.0);
    }

    #[test]
    fn test_result_without_estimate_falls_back_to_input() {
        let mut app = signed_in();
        app.update(Message::Navigate(Screen::Breakdown));
        assert_eq!(app.screen, Screen::Input);
    }

    #[test]
    fn test_incomplete_form_shows_error() {
        let mut app = signed_in();
        app.update(Message::LengthChanged("20".into()));
        app.update(Message::CalculateEstimate);
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.toast.as_ref().map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn test_dark_mode_toggle() {
        let mut app = signed_in();
        app.update(Message::DarkModeToggled(true));
        assert!(matches!(app.theme(), Theme::Dark));
        app.update(Message::DarkModeToggled(true));
        assert!(app.settings.theme.is_dark());
    }
}
