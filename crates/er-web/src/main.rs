use er_web::app_root::app_root;

fn main() {
    er_web::app::logging::init();
    dioxus::launch(app_root);
}
