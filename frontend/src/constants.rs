pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_NAME: &'static str = "name";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_ID: &'static str = "id";
pub static PROP_DISABLED: &'static str = "disabled";
pub static PROP_ROLE: &'static str = "role";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_P: &'static str = "p";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_BUTTON: &'static str = "button";

pub static APP_ROOT: &'static str = "#app";
pub static FIELD_EMAIL: &'static str = "email";
pub static ID_SUBSCRIBE: &'static str = "subscribe";
pub static ID_TOAST: &'static str = "toast";
pub static ID_RUN_TIME: &'static str = "run-time";
pub static CLASS_SHOW: &'static str = "show";

pub static DATA_API_BASE: &'static str = "apiBase";
pub static DATA_SECRET_KEY: &'static str = "secretKey";
pub static DATA_AUTH: &'static str = "auth";
pub static DATA_CONFIG_URL: &'static str = "configUrl";
pub static DATA_STRICT_DISMISS: &'static str = "strictDismiss";
