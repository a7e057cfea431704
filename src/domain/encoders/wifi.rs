//! Wi-Fi network credentials (`WIFI:` scheme understood by Android and iOS
//! camera apps).

use super::EncodeContext;
use crate::domain::fields::FieldMap;
use crate::utils::escape::escape_wifi;

const DEFAULT_AUTH: &str = "WPA";

/// `WIFI:T:<AUTH>;S:<ssid>;[P:<password>;][H:true;];`
///
/// - `auth` is upper-cased and defaults to `WPA`
/// - the `P:` segment is left out for an empty password
/// - `H:true;` is present only for hidden networks
/// - the record always ends with `;;`
pub fn encode_wifi(fields: &FieldMap, _ctx: &EncodeContext) -> String {
    let auth = match fields.text("auth") {
        "" => DEFAULT_AUTH.to_string(),
        auth => auth.to_uppercase(),
    };

    let mut out = format!("WIFI:T:{};S:{};", auth, escape_wifi(fields.text("ssid")));

    let password = fields.text("password");
    if !password.is_empty() {
        out.push_str(&format!("P:{};", escape_wifi(password)));
    }

    if fields.flag("hidden") {
        out.push_str("H:true;");
    }

    out.push(';');
    out
}
