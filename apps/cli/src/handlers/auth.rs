use anyhow::{Context, Result, ensure};
use pmt::domain::user::{LoginRequest, User};
use pmt::prelude::*;

/// Signs in with the global credentials and prints the session identity.
pub async fn login(client: &PmtClient, email: Option<&str>, password: Option<&str>) -> Result<()> {
    let user = ensure_login(client, email, password).await?;
    println!(
        "Logged in as {} ({})",
        format_username(&user.username),
        mask_email(&user.email)
    );
    Ok(())
}

/// Creates an account after gating every field client-side.
pub async fn register(
    client: &PmtClient,
    username: String,
    email: String,
    password: String,
) -> Result<()> {
    ensure!(
        is_valid_username(&username),
        "username must be 3-20 characters: letters, digits, underscore"
    );
    ensure!(is_valid_email(&email), "'{email}' is not a valid email address");
    ensure!(is_valid_password(&password), "password must be at least 6 characters");
    if !is_strong_password(&password) {
        println!("note: weak password; mix upper and lower case letters with digits");
    }

    let user = client
        .register(&User {
            id: None,
            username,
            email,
            password: Some(password),
            created_at: None,
            updated_at: None,
        })
        .await?;

    println!(
        "Account created: {} (id {})",
        format_username(&user.username),
        user.id.unwrap_or_default()
    );
    Ok(())
}

/// Validates the global credentials and opens a session on the client.
pub async fn ensure_login(
    client: &PmtClient,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<User> {
    let email = email.context("--email (or PMT_EMAIL) is required for this command")?;
    let password = password.context("--password (or PMT_PASSWORD) is required for this command")?;

    ensure!(is_valid_email(email), "'{email}' is not a valid email address");
    ensure!(is_valid_password(password), "password must be at least 6 characters");

    let user = client
        .login(&LoginRequest { email: email.to_owned(), password: password.to_owned() })
        .await?;
    Ok(user)
}
