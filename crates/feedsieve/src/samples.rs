//! Built-in sample posts covering each formatting pattern the rules target,
//! plus legitimate writing that must stay visible.

use crate::host::ContentItem;

/// A named sample post and the action expected at the default threshold.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    pub text: &'static str,
    pub structural_match: bool,
    pub expect_hidden: bool,
}

impl Sample {
    pub fn item(&self) -> ContentItem {
        ContentItem::from_text(self.text).with_structural_match(self.structural_match)
    }
}

pub const FRAGMENTED: &str = "Here is how I plan every single week:

Sunday evening I write down three outcomes. Nothing more.

Monday is for the hardest task. No email until it is done.

Tuesday and Wednesday are for meetings and reviews.

Thursday I clear the backlog that piled up.

Friday afternoon is protected thinking time.

Most people skip the Sunday part.

That is why their weeks feel random.

Plan the week before it plans you.

What does your planning ritual look like?";

pub const BAIT_WITH_ARROWS: &str = "Unpopular opinion: most dashboards are never opened twice.

We audited every internal report our team had built over two years:

\u{2192} 41 dashboards
\u{2192} 12 scheduled exports
\u{2192} 3 people who read them

The rest was noise nobody was willing to delete.

So we deleted it.

Nobody noticed.";

pub const HYPE_ONE_LINERS: &str = "\u{1F525} Huge news \u{1F525}

We just shipped it.

After eleven months.

Was it worth it?

Absolutely.

\u{1F680}\u{1F680}\u{1F680}

Let that sink in.";

pub const PROFESSIONAL_UPDATE: &str = "Our platform team wrapped up the storage migration this quarter, and I wanted to share a few notes for anyone planning something similar.

We moved roughly four hundred services from the legacy cluster over ten weeks, keeping dual writes enabled until each service passed a week of consistency checks. The slowest part was not the data copy but agreeing on ownership for services nobody had touched in years.

What helped most:
- publishing a migration calendar that every team could edit
- a single dashboard for consistency check results
- treating rollback as a normal outcome rather than a failure

Happy to go deeper on any of this in the comments.";

pub const LEGITIMATE_PROSE: &str = "Most of the friction in code review has little to do with the code itself. It comes from reviewers and authors holding different pictures of what the change is supposed to accomplish, and from neither side saying so until the third round of comments. A short paragraph at the top of a pull request that states the goal, the constraint, and the part the author is least sure about removes most of that friction before it starts.

The second source of friction is scope. Reviews stall when a change mixes a refactor with a behavior change, because the reviewer has to untangle which lines matter. Splitting the two costs the author an extra hour and saves the reviewer far more than that, and it makes the history easier to bisect later when something inevitably breaks in a way nobody predicted.

None of this is new advice, but it is advice that gets dropped the moment a deadline appears, which is exactly when it matters most.";

pub const POLL_PROMPT: &str = "Quick question for the backend folks.

Which queue do you reach for first on a new project?";

pub fn corpus() -> [Sample; 6] {
    [
        Sample {
            name: "fragmented",
            description: "every sentence is its own paragraph, no emoji",
            text: FRAGMENTED,
            structural_match: false,
            expect_hidden: true,
        },
        Sample {
            name: "bait-with-arrows",
            description: "bait opener followed by arrow bullets",
            text: BAIT_WITH_ARROWS,
            structural_match: false,
            expect_hidden: true,
        },
        Sample {
            name: "hype-one-liners",
            description: "emoji-framed one-liners with a hype run",
            text: HYPE_ONE_LINERS,
            structural_match: false,
            expect_hidden: true,
        },
        Sample {
            name: "professional-update",
            description: "normal update with a short dash list",
            text: PROFESSIONAL_UPDATE,
            structural_match: false,
            expect_hidden: false,
        },
        Sample {
            name: "legitimate-prose",
            description: "dense multi-sentence paragraphs",
            text: LEGITIMATE_PROSE,
            structural_match: false,
            expect_hidden: false,
        },
        Sample {
            name: "poll",
            description: "short prompt attached to a poll",
            text: POLL_PROMPT,
            structural_match: true,
            expect_hidden: true,
        },
    ]
}
