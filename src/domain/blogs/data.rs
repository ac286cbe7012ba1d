use time::macros::date;

use super::BlogPost;

pub static BLOGS: [BlogPost; 8] = [
    BlogPost {
        id: 1,
        slug: "building-a-diversified-portfolio",
        title: "Building a Diversified Portfolio in Uncertain Markets",
        category: "Investment Planning",
        date: date!(2024 - 01 - 15),
        author: "Robert Johnson",
        read_time: "6 min read",
        excerpt: "Diversification is the closest thing investors have to a free lunch. Here is how to spread risk across asset classes without diluting returns.",
        content: r#"# Why Diversification Matters

Markets rarely move in straight lines. A portfolio that leans on a single asset class is exposed to **every** shock that hits it.

## The Core Building Blocks

- **Equities** for long-term growth
- **Debt funds** for stability and predictable income
- **Gold** as a hedge against inflation and currency risk
- **Real estate** for tangible, income-producing assets

## Rebalancing

Set a target allocation and review it *at least once a year*. When one asset class drifts more than five percent from its target, trim the winners and top up the laggards.

### A Simple Starting Point

A 30-year-old with a moderate risk appetite might begin with 60% equity, 30% debt and 10% gold, then adjust as goals come into focus."#,
        image: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=800",
    },
    BlogPost {
        id: 2,
        slug: "retirement-planning-in-your-thirties",
        title: "Retirement Planning in Your Thirties",
        category: "Retirement Planning",
        date: date!(2024 - 01 - 22),
        author: "Jennifer Martinez",
        read_time: "5 min read",
        excerpt: "Your thirties are the decade where compounding does the heaviest lifting. Small, steady contributions now can fund decades of retirement.",
        content: r#"# Start Early, Stay Consistent

The single biggest advantage you have in your thirties is **time**. Every rupee invested today has thirty years to compound.

## Practical Steps

- Contribute to your **EPF** and consider voluntary contributions
- Open an **NPS** account for the additional tax deduction
- Automate a monthly SIP into a diversified equity fund
- Build an emergency fund covering six months of expenses

## Avoid Common Mistakes

Do not dip into retirement savings for short-term goals. *Withdrawals interrupt compounding* and are hard to make up later."#,
        image: "https://images.unsplash.com/photo-1554224155-6726b3ff858f?w=800",
    },
    BlogPost {
        id: 3,
        slug: "maximising-tax-deductions",
        title: "Maximising Your Tax Deductions This Financial Year",
        category: "Tax Planning",
        date: date!(2024 - 02 - 05),
        author: "David Chen",
        read_time: "7 min read",
        excerpt: "From Section 80C to health insurance premiums, a walk through the deductions most salaried professionals leave on the table.",
        content: r#"# Deductions Worth Claiming

Tax planning is most effective when it starts in April, not in the last week of March.

## Section 80C

- ELSS mutual funds with a three-year lock-in
- Public Provident Fund contributions
- Principal repayment on a home loan
- Life insurance premiums

## Beyond 80C

Health insurance premiums under **Section 80D** and NPS contributions under **Section 80CCD(1B)** offer deductions *over and above* the 80C limit.

### Old or New Regime?

Compare both regimes every year. If your deductions are modest, the new regime's lower slab rates may leave you better off."#,
        image: "https://images.unsplash.com/photo-1554224154-22dec7ec8818?w=800",
    },
    BlogPost {
        id: 4,
        slug: "cash-flow-management-for-small-businesses",
        title: "Cash Flow Management for Small Businesses",
        category: "Business Finance",
        date: date!(2024 - 02 - 12),
        author: "Robert Johnson",
        read_time: "6 min read",
        excerpt: "Profitable businesses still fail when cash runs out. Learn how to forecast, collect faster and keep a healthy working-capital buffer.",
        content: r#"# Cash Is King

Revenue on paper does not pay salaries. **Cash flow** decides whether a business survives a slow quarter.

## Forecast Weekly

Maintain a rolling thirteen-week cash forecast. It turns surprises into scheduled problems you can plan for.

## Collect Faster

- Invoice on delivery, not at month end
- Offer a small discount for early payment
- Follow up on overdue invoices within a week

## Keep a Buffer

Aim to hold *at least three months* of fixed costs in a liquid account or an overdraft facility you never need to touch."#,
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800",
    },
    BlogPost {
        id: 5,
        slug: "understanding-mutual-fund-sips",
        title: "Understanding Mutual Fund SIPs",
        category: "Investment Planning",
        date: date!(2024 - 02 - 26),
        author: "Jennifer Martinez",
        read_time: "4 min read",
        excerpt: "Systematic investment plans take emotion out of investing. A plain-language guide to how SIPs work and how to choose the right fund.",
        content: r#"# What Is a SIP?

A systematic investment plan invests a fixed amount in a mutual fund at regular intervals, usually monthly.

## Why It Works

- **Rupee cost averaging** buys more units when prices fall
- Automation removes the temptation to time the market
- Small amounts make it easy to start

## Choosing a Fund

Look at the fund's *rolling returns* over five and ten years rather than last year's headline number. Check the expense ratio and the consistency of the fund manager."#,
        image: "https://images.unsplash.com/photo-1590283603385-17ffb3a7f29f?w=800",
    },
    BlogPost {
        id: 6,
        slug: "health-insurance-and-retirement",
        title: "Why Health Insurance Belongs in Your Retirement Plan",
        category: "Retirement Planning",
        date: date!(2024 - 03 - 04),
        author: "David Chen",
        read_time: "5 min read",
        excerpt: "Medical costs are the fastest growing expense in retirement. Securing adequate cover early protects the corpus you worked hard to build.",
        content: r#"# The Hidden Retirement Risk

A single hospital stay can erase years of savings. Planning for **medical inflation** is as important as planning for income.

## What to Look For

- A family floater with a high sum insured
- A super top-up policy for large claims
- Lifetime renewability with no upper age limit

## Buy Before You Need It

Premiums rise and waiting periods reset with age. *Buying in your forties* locks in better terms than waiting until retirement."#,
        image: "https://images.unsplash.com/photo-1505751172876-fa1923c5c528?w=800",
    },
    BlogPost {
        id: 7,
        slug: "capital-gains-tax-explained",
        title: "Capital Gains Tax Explained",
        category: "Tax Planning",
        date: date!(2024 - 03 - 18),
        author: "Robert Johnson",
        read_time: "6 min read",
        excerpt: "Short-term or long-term, listed or unlisted: how gains on shares, mutual funds and property are taxed, and how to plan your exits.",
        content: r#"# How Gains Are Taxed

The tax on an investment gain depends on **what** you sold and **how long** you held it.

## Equity

- Short-term gains apply to holdings under twelve months
- Long-term gains above the annual exemption are taxed at a concessional rate

## Property and Debt

Holding periods and indexation rules differ for property and debt funds. Check the current rules before you sell.

### Harvesting Gains

Booking long-term equity gains *up to the exemption limit* each year resets your cost base at no tax cost."#,
        image: "https://images.unsplash.com/photo-1579621970563-ebec7560ff3e?w=800",
    },
    BlogPost {
        id: 8,
        slug: "goal-based-investing",
        title: "Goal-Based Investing: Matching Money to Milestones",
        category: "Investment Planning",
        date: date!(2024 - 04 - 01),
        author: "David Chen",
        read_time: "5 min read",
        excerpt: "A home, a child's education, an early retirement: giving every rupee a job makes it easier to pick the right investment and stay the course.",
        content: r#"# Give Every Rupee a Job

Investing without a goal is like driving without a destination. **Goal-based investing** ties each investment to a milestone and a date.

## Three Horizons

- **Short term** goals under three years belong in liquid or debt funds
- **Medium term** goals suit balanced or hybrid funds
- **Long term** goals can ride out equity volatility

## Review Annually

As a goal approaches, *shift gradually* from equity to debt so a late market fall cannot derail it."#,
        image: "https://images.unsplash.com/photo-1579532537598-459ecdaf39cc?w=800",
    },
];
