pub fn default_diff_command() -> String {
    "git diff --cached --name-only --diff-filter=ACMR".to_string()
}

pub fn default_config_file() -> &'static str {
    "lintgate.yaml"
}

pub fn default_local_config_file() -> &'static str {
    "lintgate.local.yaml"
}
