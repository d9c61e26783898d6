use crate::config::descriptor::PluginDescriptor;
use crate::core::schemas;
use crate::core::store::Store;

/// The plugins loaded regardless of database state, in load order.
pub fn core_plugins(store: &Store) -> Vec<PluginDescriptor> {
    let express_app = PluginDescriptor::new(schemas::EXPRESS_APP_PLUGIN)
        .with_setting("port", schemas::EXPRESS_APP_PORT)
        .with_setting("apiBaseUrl", schemas::EXPRESS_APP_API_BASE_URL)
        .with_setting(
            "entry",
            store.resolve(schemas::UI_ENTRY_FILE).to_string_lossy().into_owned(),
        )
        .with_setting(
            "staticFiles",
            store.resolve(schemas::UI_STATIC_DIR).to_string_lossy().into_owned(),
        );

    vec![
        express_app,
        PluginDescriptor::new(schemas::CATS_PLUGIN),
        PluginDescriptor::new(schemas::DOGS_PLUGIN),
        PluginDescriptor::new(schemas::ADOPTION_PLUGIN),
    ]
}
