use super::App;

const DISCLAIMER: &str = "Violetta is a self-care companion, not a medical or emergency service. \
If you are in danger, contact your local emergency number.";

pub fn accept(app: &App) {
    println!("{}", DISCLAIMER);
    app.stores.set_disclaimer_accepted(true);
    println!("✅ Disclaimer accepted");
}

pub fn status(app: &App) {
    if app.stores.disclaimer_accepted() {
        println!("Disclaimer accepted");
    } else {
        println!("{}\n\nAccept it with `violetta disclaimer accept`.", DISCLAIMER);
    }
}
