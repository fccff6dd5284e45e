use leptos::*;
use moon_ui::prelude::*;

use super::{icon, Story, ALERT_CIRCLE, CIRCLE_CHECK};

#[component]
pub(crate) fn AlertDemo() -> impl IntoView {
    view! {
        <div class="earth-demo earth-demo-alert">
            <Story title="Basic">
                <Alert class_name="max-w-md" icon=|| icon(CIRCLE_CHECK)>
                    <AlertTitle>"Account updated successfully"</AlertTitle>
                    <AlertDescription>
                        "Your profile information has been saved. Changes will be reflected immediately."
                    </AlertDescription>
                </Alert>
            </Story>
            <Story title="Destructive">
                <Alert
                    variant=AlertVariant::Destructive
                    class_name="max-w-md"
                    icon=|| icon(ALERT_CIRCLE)
                    title=|| "Payment failed"
                    description=|| {
                        "Your payment could not be processed. Please check your payment method and try again."
                    }
                />
            </Story>
            <Story title="Action">
                <Alert class_name="max-w-md">
                    <AlertTitle>"Dark mode is now available"</AlertTitle>
                    <AlertDescription>
                        "Enable it under your profile settings to get started."
                    </AlertDescription>
                    <AlertAction>
                        <Button size=ButtonSize::Xs>"Enable"</Button>
                    </AlertAction>
                </Alert>
            </Story>
        </div>
    }
}
