//! Deep-link parsing: the static path-to-screen map plus the two
//! parameterized routes.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    ClientProfile,
    MyProfile,
    SignIn,
    SignUp,
    ResetPassword,
    ResetPasswordConfirm { uid: String, token: String },
    Dashboard,
    SearchProfessionals,
    SearchProfessionalsListing,
    ClientHistory,
    MessageHistory { message_id: Option<String>, sender_name: String },
    ProfessionalDashboard,
    BecomeProfessional,
    More,
    Clients,
    AvailabilitySettings,
    MyPets,
    PaymentMethods,
    Settings,
    PrivacyPolicy,
    ProfessionalSettings,
    TermsOfService,
    HelpFaq,
    ContactUs,
    ProfessionalProfile,
    MyContracts,
    ChangePassword,
    AddPet,
    MyBookings,
    BookingDetails,
    ServiceManager,
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Resolves a deep-link path (optionally with a query string) to a
/// screen. Unknown paths yield `None` and fall through to the default
/// route.
pub fn parse_deep_link(input: &str) -> Option<Route> {
    let input = input.trim_start_matches('/');
    let (path, query) = match input.split_once('?') {
        Some((path, query)) => (path, query),
        None => (input, ""),
    };

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if let ["reset-password", uid, token] = segments.as_slice() {
        return Some(Route::ResetPasswordConfirm {
            uid: uid.to_string(),
            token: token.to_string(),
        });
    }

    let route = match segments.as_slice() {
        [] | ["Home"] => Route::Home,
        ["About"] => Route::About,
        ["ClientProfile"] => Route::ClientProfile,
        ["MyProfile"] => Route::MyProfile,
        ["SignIn"] => Route::SignIn,
        ["SignUp"] => Route::SignUp,
        ["ResetPassword"] => Route::ResetPassword,
        ["Dashboard"] => Route::Dashboard,
        ["SearchProfessionals"] => Route::SearchProfessionals,
        ["SearchProfessionalsListing"] => Route::SearchProfessionalsListing,
        ["ClientHistory"] => Route::ClientHistory,
        ["MessageHistory"] => Route::MessageHistory {
            message_id: query_param(query, "messageId")
                .filter(|v| !v.is_empty())
                .map(str::to_string),
            sender_name: query_param(query, "senderName")
                .filter(|v| !v.is_empty())
                .unwrap_or("Unknown User")
                .to_string(),
        },
        ["ProfessionalDashboard"] => Route::ProfessionalDashboard,
        ["BecomeProfessional"] => Route::BecomeProfessional,
        ["More"] => Route::More,
        ["Clients"] => Route::Clients,
        ["AvailabilitySettings"] => Route::AvailabilitySettings,
        ["MyPets"] => Route::MyPets,
        ["PaymentMethods"] => Route::PaymentMethods,
        ["Settings"] => Route::Settings,
        ["PrivacyPolicy"] => Route::PrivacyPolicy,
        ["ProfessionalSettings"] => Route::ProfessionalSettings,
        ["TermsOfService"] => Route::TermsOfService,
        ["HelpFAQ"] => Route::HelpFaq,
        ["ContactUs"] => Route::ContactUs,
        ["ProfessionalProfile"] => Route::ProfessionalProfile,
        ["MyContracts"] => Route::MyContracts,
        ["ChangePassword"] => Route::ChangePassword,
        ["AddPet"] => Route::AddPet,
        ["MyBookings"] => Route::MyBookings,
        ["BookingDetails"] => Route::BookingDetails,
        ["ServiceManager"] => Route::ServiceManager,
        _ => return None,
    };

    Some(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths_resolve() {
        assert_eq!(parse_deep_link("/Dashboard"), Some(Route::Dashboard));
        assert_eq!(parse_deep_link("MyBookings"), Some(Route::MyBookings));
        assert_eq!(parse_deep_link("/"), Some(Route::Home));
        assert_eq!(parse_deep_link("/NoSuchScreen"), None);
    }

    #[test]
    fn reset_password_captures_uid_and_token() {
        assert_eq!(
            parse_deep_link("/reset-password/MTA/abc-123"),
            Some(Route::ResetPasswordConfirm {
                uid: "MTA".to_string(),
                token: "abc-123".to_string(),
            })
        );
        assert_eq!(parse_deep_link("/reset-password/MTA"), None);
    }

    #[test]
    fn message_history_query_defaults() {
        assert_eq!(
            parse_deep_link("/MessageHistory?messageId=42&senderName=Jane"),
            Some(Route::MessageHistory {
                message_id: Some("42".to_string()),
                sender_name: "Jane".to_string(),
            })
        );
        assert_eq!(
            parse_deep_link("/MessageHistory"),
            Some(Route::MessageHistory {
                message_id: None,
                sender_name: "Unknown User".to_string(),
            })
        );
    }
}
