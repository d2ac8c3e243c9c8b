//! Shared constants: the page's markup contract, default timings, CSS
//! snippets, and the messages shown to visitors.

// ── Element ids ─────────────────────────────────────────────────

pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const CONTACT_FORM_ID: &str = "formularioContacto";
pub const FORM_RESPONSE_ID: &str = "formRespuesta";
pub const CONFIG_SCRIPT_ID: &str = "effects-config";

/// Contact form input ids, in [`crate::state::form::ContactField`] order.
pub const FIELD_NAME_ID: &str = "nombre";
pub const FIELD_EMAIL_ID: &str = "email";
pub const FIELD_SUBJECT_ID: &str = "asunto";
pub const FIELD_MESSAGE_ID: &str = "mensaje";

// ── Selectors ───────────────────────────────────────────────────

pub const NAV_LINKS: &str = ".nav-menu a";
pub const FRAGMENT_ANCHORS: &str = "a[href^=\"#\"]";
pub const NAVBAR: &str = ".navbar";
pub const PARALLAX_IMAGES: &str = ".proyecto-imagen";
pub const REVEAL_TARGETS: &str = ".habilidad-card, .proyecto-card, .stat, .contacto-item";
pub const STATS_SECTION: &str = ".acerca-estadisticas";
pub const STAT_NUMBERS: &str = ".stat-numero";
pub const RIPPLE_BUTTONS: &str = ".btn";
pub const LAZY_IMAGES: &str = "img.lazy";

// ── Classes and attributes ──────────────────────────────────────

pub const MENU_OPEN_CLASS: &str = "active";
pub const LAZY_CLASS: &str = "lazy";
pub const LOADED_CLASS: &str = "loaded";
pub const DEFERRED_SRC_ATTR: &str = "data-src";
pub const COUNTER_SUFFIX_ATTR: &str = "data-suffix";
pub const THEME_ATTR: &str = "data-theme";

// ── Default timings and thresholds ──────────────────────────────

pub const DEFAULT_PARALLAX_FACTOR: f64 = 0.5;
pub const DEFAULT_NAVBAR_SHADOW_THRESHOLD_PX: f64 = 100.0;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const DEFAULT_REVEAL_ANIMATION: &str = "fadeInUp 0.6s ease forwards";
pub const DEFAULT_COUNTER_STEPS: u32 = 30;
pub const DEFAULT_COUNTER_TICK_MS: u32 = 30;
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1500;
pub const DEFAULT_SUBMIT_TIMEOUT_MS: u32 = 10_000;
pub const DEFAULT_SUCCESS_HIDE_MS: u32 = 5000;
pub const DEFAULT_RIPPLE_LIFETIME_MS: u32 = 600;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ── Inline styles ───────────────────────────────────────────────

pub const NAVBAR_SHADOW_RAISED: &str = "0 2px 20px rgba(0, 0, 0, 0.15)";
pub const NAVBAR_SHADOW_RESTING: &str = "0 2px 10px rgba(0, 0, 0, 0.1)";

/// Inline style applied to each spawned ripple span.
pub const RIPPLE_STYLE: [(&str, &str); 5] = [
    ("position", "absolute"),
    ("border-radius", "50%"),
    ("background", "rgba(255, 255, 255, 0.6)"),
    ("pointer-events", "none"),
    ("animation", "ripple 0.6s ease-out"),
];

/// Inline style applied to the button hosting a ripple.
pub const RIPPLE_HOST_STYLE: [(&str, &str); 2] = [("position", "relative"), ("overflow", "hidden")];

pub const FADE_IN_UP_KEYFRAMES: &str = "
  @keyframes fadeInUp {
    from {
      opacity: 0;
      transform: translateY(30px);
    }
    to {
      opacity: 1;
      transform: translateY(0);
    }
  }
";

pub const RIPPLE_KEYFRAMES: &str = "
  @keyframes ripple {
    from {
      width: 20px;
      height: 20px;
      opacity: 1;
    }
    to {
      width: 300px;
      height: 300px;
      opacity: 0;
    }
  }
";

// ── Media queries ───────────────────────────────────────────────

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
pub const PREFERS_REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// ── Visitor-facing messages ─────────────────────────────────────

pub const MSG_MISSING_FIELDS: &str = "Por favor completa todos los campos";
pub const MSG_INVALID_EMAIL: &str = "Por favor ingresa un email válido";
pub const MSG_SENDING: &str = "Enviando...";
pub const MSG_SENT: &str = "✓ ¡Gracias! Tu mensaje ha sido enviado correctamente. Me pondré en contacto pronto.";
pub const MSG_SEND_FAILED: &str = "✗ Error al enviar el mensaje. Por favor intenta más tarde.";

pub const MSG_PAGE_LOADED: &str = "Página cargada correctamente";
pub const MSG_PREFERS_DARK: &str = "Usuario prefiere tema oscuro";

/// Styled console greeting: (text, CSS) pairs printed at boot.
pub const WELCOME_BANNER: [(&str, &str); 2] = [
    ("%c¡Bienvenido a Emmanuel Cell!", "color: #6366f1; font-size: 16px; font-weight: bold;"),
    ("%cDesarrollador Web Profesional", "color: #ec4899; font-size: 12px;"),
];
