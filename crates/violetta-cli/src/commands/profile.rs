use anyhow::Result;
use violetta_core::session::{
    CustomPronouns, GrammaticalGender, PronounType, Pronouns, gendered, render_pronouns,
};
use violetta_core::validation::{validate_email, validate_name};

use super::{App, report_outcome};

pub fn update(app: &App, name: Option<&str>, email: Option<&str>) -> Result<()> {
    let name = name.map(validate_name).transpose()?;
    let email = email.map(validate_email).transpose()?;
    let (signed_in, outcome) = app.stores.session.mutate(|s| s.update_profile(name, email));
    if !signed_in {
        anyhow::bail!("Sign in first with `violetta login`");
    }
    report_outcome(outcome);
    println!("✅ Profile updated");
    Ok(())
}

pub fn pronouns(
    app: &App,
    kind: PronounType,
    custom: Option<String>,
    gender: Option<GrammaticalGender>,
) -> Result<()> {
    let custom = match kind {
        PronounType::Other => Some(CustomPronouns { display: custom }),
        _ => None,
    };
    let pronouns = Pronouns { kind, custom };
    let (signed_in, outcome) = app
        .stores
        .session
        .mutate(|s| s.set_pronouns(pronouns, gender));
    if !signed_in {
        anyhow::bail!("Sign in first with `violetta login`");
    }
    report_outcome(outcome);
    println!("✅ Pronouns saved");
    Ok(())
}

pub fn show(app: &App) {
    let Some(session) = app.stores.session.read(|s| s.session.clone()) else {
        println!("Not signed in");
        return;
    };
    println!("{}, {}!", gendered("Bienvenid", session.gender()), session.display_name());
    if let Some(email) = &session.user_email {
        println!("  email:    {}", email);
    }
    if let Some(pronouns) = &session.pronouns {
        let custom = pronouns.custom.as_ref().and_then(|c| c.display.as_deref());
        println!("  pronouns: {}", render_pronouns(pronouns.kind, custom));
    }
    if session.is_admin() {
        println!("  role:     admin");
    }
}
