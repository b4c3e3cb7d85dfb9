//! `VK_EXT_debug_utils` glue.
//!
//! Two layers: the raw `extern "system"` callback the driver invokes, and
//! [`DebugMessenger`], which registers that callback on an instance and
//! owns everything the callback dereferences. Applications that create
//! their messenger by other means can still point the driver at
//! [`debug_utils_callback`] directly, with a `ValidationTriage` as the
//! user-data pointer.

use std::borrow::Cow;
use std::ffi::{c_void, CStr};

use ash::ext::debug_utils;
use ash::vk;
use thiserror::Error;

use crate::event::DiagnosticEvent;
use crate::triage::ValidationTriage;

/// Errors from messenger registration.
#[derive(Debug, Error)]
pub enum MessengerError {
    /// The driver refused to create the messenger.
    #[error("creating the debug-utils messenger failed: {0:?}")]
    Create(vk::Result),
}

/// Raw callback conforming to `PFN_vkDebugUtilsMessengerCallbackEXT`.
///
/// Expects the user-data pointer to be a live `ValidationTriage`. Null
/// callback data, a null user-data pointer or a null message text are
/// tolerated; nothing useful can be reported for the first two, so they
/// are dropped. Always returns [`vk::FALSE`]: the triggering Vulkan call
/// proceeds exactly as it would without validation layers.
///
/// # Safety
///
/// `p_user_data` must be null or point to a `ValidationTriage` that stays
/// alive and unmoved for as long as the driver can invoke the callback.
/// `p_callback_data` must be null or valid for the duration of the call,
/// which the driver guarantees.
pub unsafe extern "system" fn debug_utils_callback(
    message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    message_types: vk::DebugUtilsMessageTypeFlagsEXT,
    p_callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT<'_>,
    p_user_data: *mut c_void,
) -> vk::Bool32 {
    if p_callback_data.is_null() || p_user_data.is_null() {
        return vk::FALSE;
    }

    let data = &*p_callback_data;
    let message = if data.p_message.is_null() {
        Cow::Borrowed("")
    } else {
        CStr::from_ptr(data.p_message).to_string_lossy()
    };

    let triage = &*(p_user_data as *const ValidationTriage);
    let event = DiagnosticEvent::new(
        message_severity,
        message_types,
        data.message_id_number,
        &message,
    );
    triage.handle(&event);

    vk::FALSE
}

/// An installed debug-utils messenger and the triage state behind it.
///
/// Owns the `ValidationTriage` the callback dereferences and unregisters
/// the messenger on drop. Must be dropped before the `ash::Instance` it
/// was installed on; that is the usual Vulkan teardown order.
pub struct DebugMessenger {
    // The driver holds a raw pointer into this box for as long as the
    // messenger exists; boxing keeps the address stable across moves of
    // the DebugMessenger itself.
    triage: Box<ValidationTriage>,
    fns: debug_utils::Instance,
    messenger: vk::DebugUtilsMessengerEXT,
}

impl DebugMessenger {
    /// Registers the triage callback for Error and Warning severities
    /// across all three message types. That matches what the pipeline
    /// acts on; Info and Verbose reports are left to the layers' own
    /// settings.
    pub fn install(
        entry: &ash::Entry,
        instance: &ash::Instance,
        triage: ValidationTriage,
    ) -> Result<Self, MessengerError> {
        Self::install_filtered(
            entry,
            instance,
            triage,
            vk::DebugUtilsMessageSeverityFlagsEXT::ERROR
                | vk::DebugUtilsMessageSeverityFlagsEXT::WARNING,
            vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
                | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
                | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
        )
    }

    /// Registers the triage callback with explicit severity and type
    /// masks, for callers that enable more (or less) upstream.
    pub fn install_filtered(
        entry: &ash::Entry,
        instance: &ash::Instance,
        triage: ValidationTriage,
        severities: vk::DebugUtilsMessageSeverityFlagsEXT,
        types: vk::DebugUtilsMessageTypeFlagsEXT,
    ) -> Result<Self, MessengerError> {
        let triage = Box::new(triage);
        let create_info = vk::DebugUtilsMessengerCreateInfoEXT::default()
            .message_severity(severities)
            .message_type(types)
            .pfn_user_callback(Some(debug_utils_callback))
            .user_data(&*triage as *const ValidationTriage as *mut c_void);

        let fns = debug_utils::Instance::new(entry, instance);
        let messenger = unsafe {
            fns.create_debug_utils_messenger(&create_info, None)
                .map_err(MessengerError::Create)?
        };

        Ok(Self {
            triage,
            fns,
            messenger,
        })
    }

    /// The triage state serving this messenger, counters included.
    pub fn triage(&self) -> &ValidationTriage {
        &self.triage
    }
}

impl Drop for DebugMessenger {
    fn drop(&mut self) {
        // After this returns the driver will not invoke the callback
        // again, so dropping the triage box afterwards is sound.
        unsafe {
            self.fns.destroy_debug_utils_messenger(self.messenger, None);
        }
    }
}
