use serde::Deserialize;

//--------------------------------------------------------------------------------------------------
// Config to be read from file
//--------------------------------------------------------------------------------------------------

fn default_data_dir() -> String {
    ".timeclock".to_string()
}

#[derive(Deserialize)]
pub struct Config {
    #[serde(default)]
    pub debug: bool,
    pub api_url: String,
    pub lan_api_url: Option<String>,
    // Forces the LAN endpoint even when the host doesn't look like a private-network machine
    #[serde(default)]
    pub prefer_lan: bool,
    pub host: Option<String>,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

//--------------------------------------------------------------------------------------------------
