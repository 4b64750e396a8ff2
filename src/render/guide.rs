//! Static configuration guide shown on the root view.

use super::escape::escape_html;

const GUIDE_TEMPLATE: &str = r#"<h2>Configuration</h2>
<div class="configuration">
  The CLI supports multiple ways to authorize with the services:
  <ul>
    <li><b>Client Credentials</b>: Generate a secret and configure the CLI to use these long-term credentials. Use client credentials when the CLI runs from a script in an automated way.</li>
    <li><b>OAuth Login</b>: Log in using your browser and SSO of choice. This is the preferred flow when you use the CLI interactively. No credentials need to be managed.</li>
  </ul>
</div>
<h2>Client Credentials</h2>
<div class="configuration">
  <p>Set up a confidential external application and generate an application secret.</p>
  <p>Run the interactive CLI configuration:</p>
  <code>{exe} config --auth credentials</code>
  <p>The CLI asks for the main config settings:</p>
  <ul>
    <li>organization and tenant used by services which are account-scoped or tenant-scoped</li>
    <li>clientId and clientSecret to retrieve the JWT bearer token for authentication</li>
  </ul>
  <p>Afterwards the CLI is ready. Validate the setup by invoking one of the services.</p>
</div>
<h2>OAuth Login</h2>
<div class="configuration">
  <p>Set up a non-confidential external application with a redirect url which points to your local CLI.</p>
  <p>Run the interactive CLI configuration:</p>
  <code>{exe} config --auth login</code>
  <p>The CLI asks for the main config settings:</p>
  <ul>
    <li>organization and tenant used by services which are account-scoped or tenant-scoped</li>
    <li>clientId, redirectUri and scopes which are needed to initiate the OAuth flow</li>
  </ul>
  <p>Afterwards the CLI is ready. Validate the setup by invoking one of the services.</p>
</div>
"#;

/// Configuration guide for the executable named `executable`.
pub(crate) fn render_guide(executable: &str) -> String {
    GUIDE_TEMPLATE.replace("{exe}", &escape_html(executable))
}
