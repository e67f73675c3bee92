/*!
# Introductory Tutorial

Begin by opening a terminal and running the executable. The prompt shows
how many values are on the stack, how many aliases are defined and how
many source files are loaded.
<pre><code>&nbsp;  S: 0 | A: 1 | C: 0 > █
</code></pre>

Stop a running program with CTRL-C. Leave with CTRL-D or `!quit`.

Everything you type is a sequence of words separated by spaces. Numbers
and strings are pushed onto the stack. Every other word takes its
operands off the top of the stack and pushes its result back. The word
`.` removes the top value and prints it with a `+` in front.

<pre><code>&nbsp;> 1 2 + .
&nbsp;  + 3
</code></pre>

Operands are written before the operator, so `2 3 4 ^ -` raises 3 to
the 4th power and subtracts that from 2. The stack keeps whatever you
leave on it, from one line to the next.

<pre><code>&nbsp;> 2 3 4 ^ -
&nbsp;> !stack
&nbsp;  ! 0: -79
</code></pre>

The number before the colon is the distance from the top of the stack.
`???` prints the whole stack from inside a program.

## Decisions

`if` removes the top value. When it is `0` execution continues after the
matching `else`, or after `end` when there is no `else`. Any other value
runs the words after `if`.

<pre><code>&nbsp;> 0 if 10 else 20 end .
&nbsp;  + 20
</code></pre>

## Loops

A loop is `while` *condition* `do` *body* `whileend`. The condition is
evaluated on every pass; `do` leaves the loop when it finds `0`.

<pre><code>&nbsp;> 0 while dup 3 &lt; do dup . 1 + whileend
&nbsp;  + 0
&nbsp;  + 1
&nbsp;  + 2
</code></pre>

`break` leaves the innermost loop and `continue` goes back to its
condition.

## Variables

`set` stores a value under a string name and `get` pushes it back.

<pre><code>&nbsp;> 42 "answer" set
&nbsp;> "answer" get .
&nbsp;  + 42
</code></pre>

## Aliases

An alias replaces one word with other words before the program is
compiled. `sqrt` is defined as `0.5 ^` to begin with.

<pre><code>&nbsp;> !alias sq dup *
&nbsp;  ! `sq` -> `dup *`
&nbsp;> 5 sq .
&nbsp;  + 25
</code></pre>

Aliases expand one level only. An alias body that uses another alias
is not expanded again and reaches the compiler as a plain word. `!savealiases` writes
the table to the alias file so it is there next time.

## Files

`!load` runs a whole file. Comments start with `//` and run to the end
of the line. Alias definitions can appear in a file too, on a line of
their own:

```text
!alias cube dup dup * *
3 cube .   // prints + 27
```

*/
