use leptos::*;
use moon_ui::prelude::*;

use super::Story;

#[component]
pub(crate) fn CardDemo() -> impl IntoView {
    view! {
        <div class="earth-demo earth-demo-card">
            <Story title="Usage">
                <Card>
                    <CardHeader
                        title=|| "Card Title"
                        description=|| "Card Description"
                        action=|| view! { <Badge variant=BadgeVariant::Secondary>"Card Action"</Badge> }
                    />
                    <CardContent>
                        <p>"Card Content"</p>
                    </CardContent>
                    <CardFooter>
                        <p>"Card Footer"</p>
                    </CardFooter>
                </Card>
            </Story>
            <Story title="Size">
                <Card size=CardSize::Sm class_name="mx-auto w-full max-w-sm">
                    <CardHeader>
                        <CardTitle>"Small Card"</CardTitle>
                        <CardDescription>"This card uses the small size variant."</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <p>
                            "The card component supports a size prop that can be set to \"sm\" for a more compact appearance."
                        </p>
                    </CardContent>
                    <CardFooter>
                        <Button variant=ButtonVariant::Outline size=ButtonSize::Sm class_name="w-full">
                            "Action"
                        </Button>
                    </CardFooter>
                </Card>
            </Story>
        </div>
    }
}
